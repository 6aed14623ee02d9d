//! Minimal example: build a spiral matrix and look a value up.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let m = spiralmatrix::generate(4)?;
    for row in m.rows() {
        println!("{row:?}");
    }

    let cell = m.position_of(13).ok_or("13 is in a 4x4 spiral")?;
    println!("13 sits at row {}, column {}", cell.row, cell.col);
    assert_eq!(m[cell], 13);

    Ok(())
}
