fn main() {
    avalia::cli::run();
}
