//! Checksum a file (or stdin) by streaming it through `io::copy`.
//!
//! ```text
//! cargo run -p crc32c --example basic -- path/to/file
//! ```

use std::{fs::File, io};

use crc32c::Crc32c;

fn main() -> io::Result<()> {
  let mut hasher = Crc32c::new();

  match std::env::args_os().nth(1) {
    Some(path) => {
      io::copy(&mut File::open(path)?, &mut hasher)?;
    }
    None => {
      io::copy(&mut io::stdin().lock(), &mut hasher)?;
    }
  }

  println!("{:08x}", hasher.finalize());
  Ok(())
}
