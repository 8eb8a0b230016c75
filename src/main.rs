fn main() {
    apibuilder_config::app::cli::run();
}
