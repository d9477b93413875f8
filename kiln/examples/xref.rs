use kiln::{
    pdf::{FreeObject, UsedObject, Xref, XrefEntry},
    EncodeOptions, Eol, Encoder, SimpleEncoder,
};
use structopt::StructOpt;

/// Print the xref table for a set of object numbers.
///
/// Every object gets a made up byte offset, object 0 is added as head of the
/// free list.
#[derive(StructOpt, Debug)]
#[structopt(name = "kiln-xref")]
struct Opt {
    /// Object numbers in use
    numbers: Vec<u32>,

    /// Use CRLF line endings
    #[structopt(long)]
    crlf: bool,
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let mut entries: Vec<XrefEntry> = opt
        .numbers
        .iter()
        .map(|&number| {
            UsedObject {
                number,
                byte_offset: 100 * number as usize,
                generation: 0,
            }
            .into()
        })
        .collect();
    if !opt.numbers.contains(&0) {
        entries.push(FreeObject::head(0).into());
    }

    let xref = match Xref::from_entries(entries) {
        Ok(xref) => xref,
        Err(e) => {
            log::error!("Invalid object numbers: {}", e);
            return;
        }
    };
    for subsection in xref.subsections() {
        log::info!("subsection {} with {} entries", subsection.first, subsection.count());
    }

    let eol = if opt.crlf { Eol::CrLf } else { Eol::Lf };
    match SimpleEncoder::new(EncodeOptions::default().with_eol(eol)).encode(&xref) {
        Ok(table) => print!("{}", String::from_utf8_lossy(&table)),
        Err(e) => log::error!("Error while encoding: {}", e),
    }
}
