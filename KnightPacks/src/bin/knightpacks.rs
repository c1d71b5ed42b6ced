fn main() -> anyhow::Result<()> {
    knightpacks::cli::run_cli()
}
