use crate::cli::{CompletionArgs, CompletionShell};
use clap::CommandFactory;

const BIN_NAME: &str = "dep-agent";

pub fn run(args: CompletionArgs) -> i32 {
    let mut cmd = crate::cli::App::command();
    let mut out = std::io::stdout();
    let shell = match args.shell {
        CompletionShell::Nushell => {
            clap_complete::generate(clap_complete_nushell::Nushell, &mut cmd, BIN_NAME, &mut out);
            return 0;
        }
        CompletionShell::Bash => clap_complete::Shell::Bash,
        CompletionShell::Zsh => clap_complete::Shell::Zsh,
        CompletionShell::Fish => clap_complete::Shell::Fish,
        CompletionShell::Powershell => clap_complete::Shell::PowerShell,
        CompletionShell::Elvish => clap_complete::Shell::Elvish,
    };
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut out);
    0
}
