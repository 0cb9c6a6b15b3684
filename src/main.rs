fn main() {
    runctl::app::cli::run();
}
