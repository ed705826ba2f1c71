fn main() {
    tabdeck_lib::run()
}
