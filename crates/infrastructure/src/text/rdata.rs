use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::NaiveDateTime;
use data_encoding::{BASE32_DNSSEC, HEXUPPER_PERMISSIVE};
use dnsp_record_domain::record_data::{
    DEFAULT_CACHE_TIMEOUT, DEFAULT_LOOKUP_TIMEOUT, PROTOCOL_TCP, PROTOCOL_UDP, WINS_FLAG_LOCAL,
    WINS_FLAG_SCOPE,
};
use dnsp_record_domain::{
    Atma, AtmaFormat, CharacterString, CodecError, DomainName, Ds, Key, MailError, NameEncoding,
    Naptr, Nsec, Nsec3, Nsec3Param, Nxt, Preference, RecordData, RecordType, Sig, Soa, Srv, Tlsa,
    Wins, WinsR, Wks,
};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::wire::decode_payload;

const GENERIC_MARKER: &str = "\\#";

/// Cursor over the rdata tokens of one record. Every failure is reported
/// as unparsable text naming the record type and field.
struct Tokens<'a> {
    record_type: RecordType,
    iter: std::iter::Peekable<std::slice::Iter<'a, String>>,
}

impl<'a> Tokens<'a> {
    fn new(record_type: RecordType, tokens: &'a [String]) -> Self {
        Self {
            record_type,
            iter: tokens.iter().peekable(),
        }
    }

    fn error(&self, message: impl std::fmt::Display) -> CodecError {
        CodecError::unparsable(format!("{}: {}", self.record_type, message))
    }

    fn next(&mut self, field: &str) -> Result<&'a str, CodecError> {
        match self.iter.next() {
            Some(token) => Ok(token.as_str()),
            None => Err(self.error(format_args!("{} field missing", field))),
        }
    }

    fn peek(&mut self) -> Option<&'a str> {
        self.iter.peek().map(|token| token.as_str())
    }

    fn number<T: FromStr>(&mut self, field: &str) -> Result<T, CodecError> {
        let token = self.next(field)?;
        token
            .parse()
            .map_err(|_| self.error(format_args!("invalid {} '{}'", field, token)))
    }

    fn name(&mut self, field: &str) -> Result<DomainName, CodecError> {
        let token = self.next(field)?;
        DomainName::from_str(token)
            .map_err(|e| self.error(format_args!("invalid {} '{}': {}", field, token, e)))
    }

    fn string(&mut self, field: &str) -> Result<CharacterString, CodecError> {
        let token = self.next(field)?;
        CharacterString::from_presentation(token)
    }

    fn record_type(&mut self, field: &str) -> Result<RecordType, CodecError> {
        let token = self.next(field)?;
        RecordType::from_str(token).map_err(|e| self.error(e))
    }

    fn types(&mut self) -> Result<Vec<RecordType>, CodecError> {
        let mut types = Vec::new();
        while self.peek().is_some() {
            types.push(self.record_type("type")?);
        }
        Ok(types)
    }

    /// Joins the remaining tokens; encoded blobs may be split by whitespace.
    fn rest(&mut self) -> String {
        self.iter.by_ref().map(String::as_str).collect()
    }

    fn hex_rest(&mut self, field: &str) -> Result<Vec<u8>, CodecError> {
        let text = self.rest();
        decode_hex(&text).map_err(|_| self.error(format_args!("invalid hex {}", field)))
    }

    fn base64_rest(&mut self, field: &str) -> Result<Vec<u8>, CodecError> {
        let text = self.rest();
        STANDARD
            .decode(text.as_bytes())
            .map_err(|e| self.error(format_args!("invalid base64 {}: {}", field, e)))
    }

    fn finish(mut self, data: RecordData) -> Result<RecordData, CodecError> {
        match self.iter.next() {
            None => Ok(data),
            Some(extra) => Err(self.error(format_args!("unexpected token '{}'", extra))),
        }
    }
}

fn decode_hex(text: &str) -> Result<Vec<u8>, data_encoding::DecodeError> {
    HEXUPPER_PERMISSIVE.decode(text.as_bytes())
}

/// Parses the rdata tokens of `record_type`. Any type also accepts the
/// RFC 3597 form `\# <length> <hex>`.
pub fn parse_rdata_tokens(
    record_type: RecordType,
    tokens: &[String],
) -> Result<RecordData, CodecError> {
    use RecordType as T;

    let mut t = Tokens::new(record_type, tokens);

    if t.peek() == Some(GENERIC_MARKER) {
        return parse_generic(record_type, t);
    }

    let data = match record_type {
        T::ZERO => RecordData::Tombstone {
            entombed_time: t.number("entombed time")?,
        },
        T::A => RecordData::A(t.number::<Ipv4Addr>("address")?),
        T::AAAA => RecordData::Aaaa(t.number::<Ipv6Addr>("address")?),
        T::NS | T::MD | T::MF | T::CNAME | T::MB | T::MG | T::MR | T::PTR | T::DNAME => {
            RecordData::Name(t.name("target")?)
        }
        T::SOA => RecordData::Soa(Soa {
            primary_server: t.name("primary server")?,
            administrator: t.name("administrator")?,
            serial: t.number("serial")?,
            refresh: t.number("refresh")?,
            retry: t.number("retry")?,
            expire: t.number("expire")?,
            minimum: t.number("minimum")?,
        }),
        T::NULL => RecordData::Null(t.hex_rest("data")?),
        T::WKS => parse_wks(&mut t)?,
        T::HINFO => RecordData::Strings(vec![t.string("cpu")?, t.string("os")?]),
                T::ISDN => {
            let mut strings = vec![t.string("isdn address")?];
            if t.peek().is_some() {
                strings.push(t.string("subaddress")?);
            }
            RecordData::Strings(strings)
        }
        T::X25 | T::TXT => {
            let mut strings = vec![t.string("text")?];
            while t.peek().is_some() {
                strings.push(t.string("text")?);
            }
            RecordData::Strings(strings)
        }
        T::MINFO | T::RP => RecordData::MailError(MailError {
            mailbox: t.name("mailbox")?,
            error_mailbox: t.name("error mailbox")?,
        }),
        T::MX | T::AFSDB | T::RT => RecordData::Preference(Preference {
            preference: t.number("preference")?,
            exchange: t.name("exchange")?,
        }),
        T::SIG | T::RRSIG => RecordData::Sig(Sig {
            type_covered: t.record_type("type covered")?,
            algorithm: t.number("algorithm")?,
            labels: t.number("labels")?,
            original_ttl: t.number("original ttl")?,
            expiration: signature_time(&mut t, "expiration")?,
            inception: signature_time(&mut t, "inception")?,
            key_tag: t.number("key tag")?,
            signer: t.name("signer")?,
            signature: t.base64_rest("signature")?,
        }),
        T::KEY | T::DNSKEY => RecordData::Key(Key {
            flags: t.number("flags")?,
            protocol: t.number("protocol")?,
            algorithm: t.number("algorithm")?,
            key: t.base64_rest("public key")?,
        }),
        T::NXT => RecordData::Nxt(Nxt {
            next: t.name("next domain")?,
            types: t.types()?,
        }),
        T::SRV => RecordData::Srv(Srv {
            priority: t.number("priority")?,
            weight: t.number("weight")?,
            port: t.number("port")?,
            target: t.name("target")?,
        }),
        T::ATMA => parse_atma(&mut t)?,
        T::NAPTR => RecordData::Naptr(Naptr {
            order: t.number("order")?,
            preference: t.number("preference")?,
            flags: t.string("flags")?,
            service: t.string("service")?,
            regexp: t.string("regexp")?,
            replacement: t.name("replacement")?,
        }),
        T::DS => RecordData::Ds(Ds {
            key_tag: t.number("key tag")?,
            algorithm: t.number("algorithm")?,
            digest_type: t.number("digest type")?,
            digest: t.hex_rest("digest")?,
        }),
        T::NSEC => RecordData::Nsec(Nsec {
            next: t.name("next domain")?,
            types: t.types()?,
        }),
        T::DHCID => RecordData::Dhcid(t.base64_rest("digest")?),
        T::NSEC3 => RecordData::Nsec3(Nsec3 {
            algorithm: t.number("hash algorithm")?,
            flags: t.number("flags")?,
            iterations: t.number("iterations")?,
            salt: salt(&mut t)?,
            next_hashed_owner: next_hashed_owner(&mut t)?,
            types: t.types()?,
        }),
        T::NSEC3PARAM => RecordData::Nsec3Param(Nsec3Param {
            algorithm: t.number("hash algorithm")?,
            flags: t.number("flags")?,
            iterations: t.number("iterations")?,
            salt: salt(&mut t)?,
        }),
        T::TLSA => RecordData::Tlsa(Tlsa {
            usage: t.number("certificate usage")?,
            selector: t.number("selector")?,
            matching_type: t.number("matching type")?,
            data: t.hex_rest("certificate data")?,
        }),
        T::WINS => parse_wins(&mut t)?,
        T::WINSR => parse_wins_r(&mut t)?,
        T::Unknown(_) => {
            return Err(t.error("unknown types take only the \\# <length> <hex> form"));
        }
    };

    t.finish(data)
}

fn parse_generic(record_type: RecordType, mut t: Tokens<'_>) -> Result<RecordData, CodecError> {
    t.next("generic marker")?;
    let length: usize = t.number("generic length")?;
    let bytes = t.hex_rest("generic data")?;
    if bytes.len() != length {
        return Err(t.error(format_args!(
            "generic data holds {} bytes, {} declared",
            bytes.len(),
            length
        )));
    }

    match record_type {
        RecordType::NULL => Ok(RecordData::Null(bytes)),
        RecordType::Unknown(_) => Ok(RecordData::Unknown(bytes)),
        known => decode_payload(known, &bytes, NameEncoding::Labels)
            .map_err(|e| t.error(format_args!("generic data does not decode: {}", e))),
    }
}

/// `YYYYMMDDHHmmSS` or seconds since the epoch.
fn signature_time(t: &mut Tokens<'_>, field: &str) -> Result<u32, CodecError> {
    let token = t.next(field)?;
    if token.len() == 14 && token.bytes().all(|b| b.is_ascii_digit()) {
        let time = NaiveDateTime::parse_from_str(token, "%Y%m%d%H%M%S")
            .map_err(|e| t.error(format_args!("invalid {} '{}': {}", field, token, e)))?;
        return u32::try_from(time.and_utc().timestamp())
            .map_err(|_| t.error(format_args!("{} '{}' out of range", field, token)));
    }
    token
        .parse()
        .map_err(|_| t.error(format_args!("invalid {} '{}'", field, token)))
}

fn salt(t: &mut Tokens<'_>) -> Result<Vec<u8>, CodecError> {
    let token = t.next("salt")?;
    if token == "-" {
        return Ok(Vec::new());
    }
    decode_hex(token).map_err(|_| t.error(format_args!("invalid salt '{}'", token)))
}

fn next_hashed_owner(t: &mut Tokens<'_>) -> Result<Vec<u8>, CodecError> {
    let token = t.next("next hashed owner")?;
    BASE32_DNSSEC
        .decode(token.to_ascii_lowercase().as_bytes())
        .map_err(|_| t.error(format_args!("invalid next hashed owner '{}'", token)))
}

fn parse_wks(t: &mut Tokens<'_>) -> Result<RecordData, CodecError> {
    let address = t.number::<Ipv4Addr>("address")?;
    let protocol_token = t.next("protocol")?;
    let protocol = match protocol_token.to_ascii_lowercase().as_str() {
        "tcp" => PROTOCOL_TCP,
        "udp" => PROTOCOL_UDP,
        other => other
            .parse()
            .map_err(|_| t.error(format_args!("invalid protocol '{}'", protocol_token)))?,
    };

    let mut services = Vec::new();
    while let Some(service) = t.peek() {
        services.push(service);
        t.next("service")?;
    }

    Ok(RecordData::Wks(Wks {
        address,
        protocol,
        services: CharacterString::from(services.join(" ")),
    }))
}

fn parse_atma(t: &mut Tokens<'_>) -> Result<RecordData, CodecError> {
    let token = t.next("address")?;

    if let Some(digits) = token.strip_prefix('+') {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(t.error(format_args!("invalid E.164 address '{}'", token)));
        }
        return Ok(RecordData::Atma(Atma {
            format: AtmaFormat::E164,
            address: digits.as_bytes().to_vec(),
        }));
    }

    let address = decode_hex(&token.replace('.', ""))
        .map_err(|_| t.error(format_args!("invalid AESA address '{}'", token)))?;
    Ok(RecordData::Atma(Atma {
        format: AtmaFormat::Aesa,
        address,
    }))
}

struct WinsOptions {
    mapping_flag: u32,
    lookup_timeout: u32,
    cache_timeout: u32,
}

/// Leading `LOCAL`, `SCOPE`, `L<seconds>` and `C<seconds>` tokens.
fn wins_options(t: &mut Tokens<'_>) -> Result<WinsOptions, CodecError> {
    let mut options = WinsOptions {
        mapping_flag: 0,
        lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        cache_timeout: DEFAULT_CACHE_TIMEOUT,
    };

    while let Some(token) = t.peek() {
        let upper = token.to_ascii_uppercase();
        let timeout = |prefix: char| {
            upper
                .strip_prefix(prefix)
                .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|digits| digits.parse::<u32>().ok())
        };

        if upper == "LOCAL" {
            options.mapping_flag |= WINS_FLAG_LOCAL;
        } else if upper == "SCOPE" {
            options.mapping_flag |= WINS_FLAG_SCOPE;
        } else if let Some(seconds) = timeout('L') {
            options.lookup_timeout = seconds;
        } else if let Some(seconds) = timeout('C') {
            options.cache_timeout = seconds;
        } else {
            break;
        }
        t.next("option")?;
    }

    Ok(options)
}

fn parse_wins(t: &mut Tokens<'_>) -> Result<RecordData, CodecError> {
    let options = wins_options(t)?;
    let mut servers = vec![t.number::<Ipv4Addr>("wins server")?];
    while t.peek().is_some() {
        servers.push(t.number::<Ipv4Addr>("wins server")?);
    }

    Ok(RecordData::Wins(Wins {
        mapping_flag: options.mapping_flag,
        lookup_timeout: options.lookup_timeout,
        cache_timeout: options.cache_timeout,
        servers,
    }))
}

fn parse_wins_r(t: &mut Tokens<'_>) -> Result<RecordData, CodecError> {
    let options = wins_options(t)?;
    Ok(RecordData::WinsR(WinsR {
        mapping_flag: options.mapping_flag,
        lookup_timeout: options.lookup_timeout,
        cache_timeout: options.cache_timeout,
        result_domain: t.name("result domain")?,
    }))
}
