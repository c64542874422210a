//! CSV export of a generated dataset.
//!
//! Header `x,y` for the sample datasets and `size,bedrooms,age,location,price`
//! for the houses, one comma-joined row per record, rows separated by `\n`
//! with no trailing newline. Every field is numeric so nothing is quoted.

use crate::dataset::{DatasetKind, Datasets, HouseRecord, Sample};
use std::io::{self, Write};

pub const SAMPLE_HEADER: &str = "x,y";
pub const HOUSE_HEADER: &str = "size,bedrooms,age,location,price";

fn sample_row(sample: &Sample) -> String {
    format!("{},{}", sample.x, sample.y)
}

fn house_row(house: &HouseRecord) -> String {
    format!(
        "{},{},{},{},{}",
        house.size,
        house.bedrooms,
        house.age,
        u8::from(house.location),
        house.price
    )
}

fn write_rows<W, I>(writer: &mut W, header: &str, rows: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = String>,
{
    writer.write_all(header.as_bytes())?;
    for row in rows {
        writer.write_all(b"\n")?;
        writer.write_all(row.as_bytes())?;
    }
    writer.flush()
}

pub fn write_csv<W: Write + ?Sized>(
    kind: DatasetKind,
    datasets: &Datasets,
    writer: &mut W,
) -> io::Result<()> {
    match kind {
        DatasetKind::Simple => write_rows(writer, SAMPLE_HEADER, datasets.simple.iter().map(sample_row)),
        DatasetKind::Multiple => write_rows(writer, HOUSE_HEADER, datasets.multiple.iter().map(house_row)),
        DatasetKind::Polynomial => {
            write_rows(writer, SAMPLE_HEADER, datasets.polynomial.iter().map(sample_row))
        }
    }
}

pub fn to_csv_string(kind: DatasetKind, datasets: &Datasets) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_csv(kind, datasets, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
