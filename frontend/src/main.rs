//! Binary entry point for the console. All logic lives in the library
//! crate.

fn main() {
	frontend::main();
}
