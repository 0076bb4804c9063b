fn main() {
    adminfix::app::cli::run();
}
