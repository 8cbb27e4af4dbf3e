fn main() -> anyhow::Result<()> {
    catalogue_cli::run()
}
