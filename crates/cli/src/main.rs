fn main() -> Result<(), Box<dyn std::error::Error>> {
    navkit_cli::run()
}
