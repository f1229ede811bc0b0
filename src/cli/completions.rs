use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    blockdeps completions bash > ~/.bash_completion.d/blockdeps\n\n\
                  Generate zsh completions:\n    blockdeps completions zsh > ~/.zfunc/_blockdeps\n\n\
                  Generate fish completions:\n    blockdeps completions fish > ~/.config/fish/completions/blockdeps.fish\n\n\
                  Generate PowerShell completions:\n    blockdeps completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
