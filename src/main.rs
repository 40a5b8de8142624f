fn main() {
    projloc::app::cli::run();
}
