use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::board::Board;
use crate::parser;
use crate::LoadBoard;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl<P: AsRef<Path> + ?Sized> LoadBoard for P {
    fn load_board(&self) -> Result<Board, Box<dyn Error>> {
        let text = read_file(self)?;
        Ok(parser::parse(&text)?)
    }
}
