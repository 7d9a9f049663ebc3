fn main() {
    ipp::term::main()
}
