fn main() {
    // Emits ESP-IDF toolchain env for target builds; no-op on plain hosts.
    embuild::espidf::sysenv::output();
}
