fn main() -> anyhow::Result<()> {
    mcaddon::cli::run_cli()
}
