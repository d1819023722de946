/// The canonical greeting.
pub fn say_hello() -> &'static str {
    "Hello"
}
