fn main() {
    #[cfg(feature = "cli")]
    gamegenie::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("gamegenie: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
