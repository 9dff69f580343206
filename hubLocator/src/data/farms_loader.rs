use std::fs::File;
use std::io::Read;
use std::path::Path;
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::{debug, warn};
use crate::config::locator_config::InputFormat;
use crate::models::wind_farm::WindFarm;
use crate::utils::logging::{self, OperationCategory, InputParsingType, FileIOType};
use super::poi::GridPoint;

#[derive(Debug)]
pub enum FarmLoadError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    MissingCount,
    InvalidToken { position: usize, token: String },
    NonPositiveCount(i64),
    TruncatedInput { expected: usize, found: usize },
    NegativePremium { index: usize, premium: i32 },
}

impl From<std::io::Error> for FarmLoadError {
    fn from(err: std::io::Error) -> Self {
        FarmLoadError::IoError(err)
    }
}

impl From<csv::Error> for FarmLoadError {
    fn from(err: csv::Error) -> Self {
        FarmLoadError::CsvError(err)
    }
}

impl std::fmt::Display for FarmLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FarmLoadError::IoError(e) => write!(f, "IO error: {}", e),
            FarmLoadError::CsvError(e) => write!(f, "CSV error: {}", e),
            FarmLoadError::MissingCount => write!(f, "Input is empty: expected the number of wind farms"),
            FarmLoadError::InvalidToken { position, token } => {
                write!(f, "Token {} is not a valid integer: {:?}", position, token)
            }
            FarmLoadError::NonPositiveCount(n) => write!(f, "Wind farm count must be positive, got {}", n),
            FarmLoadError::TruncatedInput { expected, found } => {
                write!(f, "Expected {} wind farms but input holds only {} complete records", expected, found)
            }
            FarmLoadError::NegativePremium { index, premium } => {
                write!(f, "Wind farm {} has negative premium {}", index, premium)
            }
        }
    }
}

impl std::error::Error for FarmLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FarmLoadError::IoError(e) => Some(e),
            FarmLoadError::CsvError(e) => Some(e),
            _ => None,
        }
    }
}

// Positions are 1-based to match what a user counts in the file
fn parse_token(token: &str, position: usize) -> Result<i32, FarmLoadError> {
    token.parse::<i32>().map_err(|_| FarmLoadError::InvalidToken {
        position,
        token: token.to_string(),
    })
}

/// Rejects farms whose premium is negative; reports the first one in input order.
pub fn validate_farms(farms: &[WindFarm]) -> Result<(), FarmLoadError> {
    let _timing = logging::start_timing("validate_farms",
        OperationCategory::InputParsing { subcategory: InputParsingType::Validation });

    match farms.iter().find(|farm| farm.get_premium() < 0) {
        Some(farm) => Err(FarmLoadError::NegativePremium {
            index: farm.get_index(),
            premium: farm.get_premium(),
        }),
        None => Ok(()),
    }
}

/// Parses `n` followed by `n` triples of `x y premium`, all whitespace separated.
///
/// Tokens after the last triple are ignored.
pub fn parse_farms(input: &str) -> Result<Vec<WindFarm>, FarmLoadError> {
    let _timing = logging::start_timing("parse_farms",
        OperationCategory::InputParsing { subcategory: InputParsingType::TokenStream });

    let mut tokens = input.split_whitespace().enumerate().map(|(i, t)| (i + 1, t));

    let (position, count_token) = tokens.next().ok_or(FarmLoadError::MissingCount)?;
    let count: i64 = count_token.parse().map_err(|_| FarmLoadError::InvalidToken {
        position,
        token: count_token.to_string(),
    })?;
    if count <= 0 {
        return Err(FarmLoadError::NonPositiveCount(count));
    }
    let expected = usize::try_from(count).map_err(|_| FarmLoadError::NonPositiveCount(count))?;

    let mut farms = Vec::new();
    for index in 0..expected {
        let mut triple = [0i32; 3];
        for slot in triple.iter_mut() {
            let (position, token) = tokens.next().ok_or(FarmLoadError::TruncatedInput {
                expected,
                found: farms.len(),
            })?;
            *slot = parse_token(token, position)?;
        }

        let [x, y, premium] = triple;
        farms.push(WindFarm::new(index, GridPoint::new(x, y), premium));
    }

    validate_farms(&farms)?;

    let extra = tokens.count();
    if extra > 0 {
        warn!("Ignoring {} trailing tokens after {} wind farms", extra, expected);
    }

    debug!("Parsed {} wind farms", farms.len());
    Ok(farms)
}

#[derive(Debug, Deserialize)]
struct FarmRecord {
    x: i32,
    y: i32,
    premium: i32,
}

/// Parses a headered CSV with columns `x,y,premium`; one record per farm.
pub fn parse_farms_csv(input: &str) -> Result<Vec<WindFarm>, FarmLoadError> {
    let _timing = logging::start_timing("parse_farms_csv",
        OperationCategory::InputParsing { subcategory: InputParsingType::Csv });

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let mut farms = Vec::new();
    for (index, result) in reader.deserialize::<FarmRecord>().enumerate() {
        let record = result?;
        farms.push(WindFarm::new(index, GridPoint::new(record.x, record.y), record.premium));
    }

    if farms.is_empty() {
        return Err(FarmLoadError::NonPositiveCount(0));
    }
    validate_farms(&farms)?;

    debug!("Parsed {} wind farms from CSV", farms.len());
    Ok(farms)
}

pub fn parse_with_format(input: &str, format: InputFormat) -> Result<Vec<WindFarm>, FarmLoadError> {
    match format {
        InputFormat::Plain => parse_farms(input),
        InputFormat::Csv => parse_farms_csv(input),
    }
}

/// Reads all of `reader` then parses it.
pub fn load_farms<R: Read>(mut reader: R, format: InputFormat) -> Result<Vec<WindFarm>, FarmLoadError> {
    let mut contents = String::new();
    {
        let _timing = logging::start_timing("read_input",
            OperationCategory::FileIO { subcategory: FileIOType::InputRead });
        reader.read_to_string(&mut contents)?;
    }

    parse_with_format(&contents, format)
}

pub fn load_farms_from_path<P: AsRef<Path>>(path: P, format: InputFormat) -> Result<Vec<WindFarm>, FarmLoadError> {
    let file = File::open(path.as_ref())?;
    debug!("Reading wind farms from {}", path.as_ref().display());
    load_farms(file, format)
}
