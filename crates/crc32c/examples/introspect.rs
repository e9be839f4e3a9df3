//! Print the backend and configuration this process would use.
//!
//! ```text
//! cargo run -p crc32c --example introspect
//! CRC32C_FORCE=portable cargo run -p crc32c --example introspect
//! ```

use crc32c::{Crc32c, config, dispatch};

fn main() {
  let cfg = config::get();
  println!("requested force : {}", cfg.requested_force.as_str());
  println!("effective force : {}", cfg.effective_force.as_str());
  println!("selected backend: {}", crc32c::selected_backend());
  match dispatch::hardware() {
    Some(hw) => println!("hardware adapter: {}", hw.name),
    None => println!("hardware adapter: none"),
  }
  println!("check value     : {:#010X}", Crc32c::checksum(b"123456789"));
}
