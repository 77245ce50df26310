fn main() {
    dirseed::app::cli::run();
}
