//! Shell completion scripts.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::JournalError;

const BIN: &str = "pinkink";

/// Execute completions command.
///
/// # Errors
///
/// Returns `InvalidInput` for an unsupported shell.
pub fn completions(shell: &str, install: bool) -> Result<String, JournalError> {
    let shell = shell_from_str(shell).ok_or_else(|| {
        JournalError::InvalidInput(format!(
            "Unknown shell: {shell}. Supported: bash, zsh, fish, powershell, elvish"
        ))
    })?;

    if install {
        Ok(install_instructions(shell))
    } else {
        generate(shell)
    }
}

fn generate(shell: Shell) -> Result<String, JournalError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN, &mut buf);
    String::from_utf8(buf).map_err(|e| JournalError::Parse(format!("UTF-8 error: {e}")))
}

fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

fn install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc:
source <(pinkink completions bash)
"
        .to_string(),

        Shell::Zsh => r"# Save to your fpath:
pinkink completions zsh > ~/.zsh/completions/_pinkink
# Then in ~/.zshrc, before compinit:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"
        .to_string(),

        Shell::Fish => r"# Save to the fish completions directory:
pinkink completions fish > ~/.config/fish/completions/pinkink.fish
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
pinkink completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Save to the elvish lib directory:
pinkink completions elvish > ~/.elvish/lib/pinkink.elv
# Then add to ~/.elvish/rc.elv:
use pinkink
"
        .to_string(),

        _ => "Unknown shell".to_string(),
    }
}
