fn main() {
    primogan_frontend::start();
}
