use dnsp_record_application::ports::RecordTextParser;
use dnsp_record_domain::{
    CodecConfig, CodecError, DomainName, RecordClass, RecordData, RecordType, ResourceRecord,
};
use std::str::FromStr;

use super::lexer::tokenize;
use super::rdata::parse_rdata_tokens;

/// Parses a TTL with optional `s`, `m`, `h`, `d` and `w` unit suffixes.
/// Units can be chained, so `1h30m` is 5400.
pub fn parse_time(ttl: &str) -> Result<u32, CodecError> {
    let invalid = || CodecError::unparsable(format!("invalid ttl '{}'", ttl));

    if ttl.is_empty() {
        return Err(invalid());
    }

    let (mut start, mut total) = (None, 0_u32);
    for (i, c) in ttl.char_indices() {
        let digits_from = match (start, c) {
            (None, '0'..='9') => {
                start = Some(i);
                continue;
            }
            (Some(_), '0'..='9') => continue,
            (Some(from), 's' | 'S' | 'm' | 'M' | 'h' | 'H' | 'd' | 'D' | 'w' | 'W') => from,
            _ => return Err(invalid()),
        };

        let number = u32::from_str(&ttl[digits_from..i]).map_err(|_| invalid())?;
        let multiplier = match c.to_ascii_lowercase() {
            'm' => 60,
            'h' => 3_600,
            'd' => 86_400,
            'w' => 604_800,
            _ => 1,
        };

        total = number
            .checked_mul(multiplier)
            .and_then(|seconds| total.checked_add(seconds))
            .ok_or_else(invalid)?;
        start = None;
    }

    if let Some(from) = start {
        let number = u32::from_str(&ttl[from..]).map_err(|_| invalid())?;
        total = total.checked_add(number).ok_or_else(invalid)?;
    }

    Ok(total)
}

/// Presentation-format parser for single records and zone lines.
#[derive(Debug, Clone, Copy)]
pub struct ZoneTextParser {
    default_ttl: u32,
}

impl ZoneTextParser {
    pub fn new(default_ttl: u32) -> Self {
        Self { default_ttl }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::new(config.default_ttl)
    }

    pub fn default_ttl(&self) -> u32 {
        self.default_ttl
    }
}

impl Default for ZoneTextParser {
    fn default() -> Self {
        Self::from_config(&CodecConfig::default())
    }
}

impl RecordTextParser for ZoneTextParser {
    fn parse_rdata(&self, record_type: RecordType, text: &str) -> Result<RecordData, CodecError> {
        let tokens = tokenize(text)?;
        parse_rdata_tokens(record_type, &tokens)
    }

    fn parse_line(&self, line: &str) -> Result<ResourceRecord, CodecError> {
        let tokens = tokenize(line)?;
        let mut rest = tokens.iter();

        let owner_token = rest
            .next()
            .ok_or_else(|| CodecError::unparsable("empty record line"))?;
        let owner = DomainName::from_str(owner_token).map_err(|e| {
            CodecError::unparsable(format!("invalid owner '{}': {}", owner_token, e))
        })?;

        let mut ttl = None;
        let mut class = None;
        let type_token = loop {
            let token = rest
                .next()
                .ok_or_else(|| CodecError::unparsable("record line has no type"))?;

            if ttl.is_none() && token.starts_with(|c: char| c.is_ascii_digit()) {
                ttl = Some(parse_time(token)?);
            } else if class.is_none() && RecordClass::from_str(token).is_ok() {
                class = RecordClass::from_str(token).ok();
            } else {
                break token;
            }
        };

        let record_type = RecordType::from_str(type_token).map_err(CodecError::unparsable)?;
        let rdata: Vec<String> = rest.cloned().collect();
        let data = parse_rdata_tokens(record_type, &rdata)?;

        Ok(ResourceRecord::new(
            owner,
            class.unwrap_or(RecordClass::IN),
            record_type,
            ttl.unwrap_or(self.default_ttl),
            data,
        ))
    }
}
