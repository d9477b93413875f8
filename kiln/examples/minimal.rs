use flate2::{write::ZlibEncoder, Compression};
use kiln::{
    pdf::{Dictionary, FreeObject, Name, Object, Reference, Stream, TrailerInfo, Xref},
    EncodeOptions, Eol, KilnError, PdfWriter, WriterConfig,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};
use structopt::StructOpt;

/// Write a one page PDF that says hello.
#[derive(StructOpt, Debug)]
#[structopt(name = "kiln-minimal")]
struct Opt {
    /// Output file
    #[structopt(short, long, parse(from_os_str))]
    output: PathBuf,

    /// Use CRLF line endings
    #[structopt(long)]
    crlf: bool,

    /// Write the content stream without compression
    #[structopt(long)]
    uncompressed: bool,
}

const CONTENT: &[u8] = b"BT /F1 24 Tf 72 720 Td (Hello from kiln) Tj ET";

fn dict<const N: usize>(entries: [(&str, Object); N]) -> Dictionary {
    entries.into_iter().map(|(key, value)| (Name::from(key), value)).collect()
}

fn name(n: &str) -> Object {
    Object::Name(Name::from(n))
}

fn content_stream(compress: bool) -> std::io::Result<Stream> {
    if !compress {
        return Ok(Stream::new(Dictionary::new(), CONTENT));
    }
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(CONTENT)?;
    let data = encoder.finish()?;
    log::debug!("compressed content from {} to {} bytes", CONTENT.len(), data.len());
    Ok(Stream::new(dict([("Filter", name("FlateDecode"))]), data))
}

fn write_document(writer: &mut PdfWriter, sink: &mut impl Write, opt: &Opt) -> Result<(), KilnError> {
    let catalog = Reference::new(1, 0);
    let pages = Reference::new(2, 0);
    let page = Reference::new(3, 0);
    let font = Reference::new(4, 0);
    let contents = Reference::new(5, 0);

    writer.write_header((1, 7), true);
    writer.write_object(
        catalog,
        &Object::from(dict([("Type", name("Catalog")), ("Pages", Object::from(pages))])),
    )?;
    writer.write_object(
        pages,
        &Object::from(dict([
            ("Type", name("Pages")),
            ("Kids", Object::from(vec![Object::from(page)])),
            ("Count", Object::Integer(1)),
        ])),
    )?;
    writer.write_object(
        page,
        &Object::from(dict([
            ("Type", name("Page")),
            ("Parent", Object::from(pages)),
            ("MediaBox", Object::from(vec![Object::Integer(0), Object::Integer(0), Object::Integer(612), Object::Integer(792)])),
            (
                "Resources",
                Object::from(dict([("Font", Object::from(dict([("F1", Object::from(font))])))])),
            ),
            ("Contents", Object::from(contents)),
        ])),
    )?;
    writer.write_object(
        font,
        &Object::from(dict([
            ("Type", name("Font")),
            ("Subtype", name("Type1")),
            ("BaseFont", name("Helvetica")),
        ])),
    )?;
    writer.write_object(contents, &Object::from(content_stream(!opt.uncompressed)?))?;
    writer.flush_to(sink)?;

    let mut entries = writer.used_entries();
    entries.push(FreeObject::head(0).into());
    let xref = Xref::from_entries(entries).map_err(KilnError::Xref)?;
    let startxref = writer.write_xref_table(&xref)?;
    let trailer = Dictionary::from(TrailerInfo::new(&xref, catalog));
    writer.write_trailer(&trailer, startxref)?;
    writer.write_eof();
    writer.flush_to(sink)
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let eol = if opt.crlf { Eol::CrLf } else { Eol::Lf };
    let mut writer = PdfWriter::new(WriterConfig::default().with_encode(EncodeOptions::default().with_eol(eol)));

    let file = match File::create(&opt.output) {
        Ok(file) => file,
        Err(e) => {
            log::error!("Could not create {}: {}", opt.output.display(), e);
            return;
        }
    };
    let mut sink = BufWriter::new(file);

    if let Err(e) = write_document(&mut writer, &mut sink, &opt).and_then(|_| sink.flush().map_err(KilnError::from)) {
        log::error!("Error while writing: {:?}", e);
        return;
    }
    log::info!("wrote {} bytes to {}", writer.position(), opt.output.display());
}
