//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Text printed for `--help`.
pub fn usage() -> String {
    format!(
        "app-fotos {VERSION}\n\
         Puja fotos a les carpetes de Google Drive de l'IE Gornal.\n\
         \n\
         USAGE:\n    app-fotos [OPTIONS]\n\
         \n\
         OPTIONS:\n\
         \x20   --code <CODE|URL>  Authorization code, or the redirect URL copied from the browser\n\
         \x20   -V, --version      Print version\n\
         \x20   -h, --help         Print this help\n\
         \n\
         ENVIRONMENT:\n\
         \x20   APP_FOTOS_CLIENT_ID, APP_FOTOS_CLIENT_SECRET, APP_FOTOS_REDIRECT_URI,\n\
         \x20   APP_FOTOS_FOLDERS, APP_FOTOS_NO_BROWSER, APP_FOTOS_LOG\n"
    )
}

/// Handle the --version command.
pub fn handle_version_command() -> ! {
    println!("app-fotos {}", VERSION);
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    print!("{}", usage());
    std::process::exit(0)
}
