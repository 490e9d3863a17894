fn main() {
    git_env::app::cli::run();
}
