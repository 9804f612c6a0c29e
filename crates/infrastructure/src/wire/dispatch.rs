use dnsp_record_domain::{CodecError, PayloadFamily, RecordData, RecordType};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

use super::payload::{address, compound, dnssec, names, opaque, strings, wins};
use super::reader::PayloadReader;
use super::writer::PayloadWriter;

type EncodeFn = fn(RecordType, &RecordData, &mut PayloadWriter) -> Result<(), CodecError>;
type DecodeFn = fn(RecordType, &mut PayloadReader<'_>) -> Result<RecordData, CodecError>;

/// Payload encoder and decoder registered for one record type.
pub struct PayloadCodec {
    pub record_type: RecordType,
    /// Smallest buffer a valid payload of this type can occupy.
    pub min_len: usize,
    encode: EncodeFn,
    decode: DecodeFn,
}

impl PayloadCodec {
    pub(crate) fn encode(
        &self,
        record_type: RecordType,
        data: &RecordData,
        writer: &mut PayloadWriter,
    ) -> Result<(), CodecError> {
        (self.encode)(record_type, data, writer)
    }

    pub(crate) fn decode(
        &self,
        record_type: RecordType,
        reader: &mut PayloadReader<'_>,
    ) -> Result<RecordData, CodecError> {
        (self.decode)(record_type, reader)
    }

    /// Rejects buffers below the minimum with the error of the field that
    /// would have failed first.
    pub fn check_min_len(&self, record_type: RecordType, len: usize) -> Result<(), CodecError> {
        if len >= self.min_len {
            return Ok(());
        }

        Err(match record_type.family() {
            PayloadFamily::Address => CodecError::InvalidAddressLength {
                record_type,
                length: len,
            },
            PayloadFamily::NameReference => {
                CodecError::invalid_name(format!("{} byte buffer holds no name", len))
            }
            PayloadFamily::CharacterString => CodecError::InvalidStringLength {
                declared: self.min_len,
                available: len,
            },
            _ => CodecError::PayloadLengthMismatch {
                declared: self.min_len,
                available: len,
            },
        })
    }
}

// Stands in for every unregistered code.
static OPAQUE_CODEC: PayloadCodec = PayloadCodec {
    record_type: RecordType::Unknown(0),
    min_len: 0,
    encode: opaque::encode_raw,
    decode: opaque::decode_unknown,
};

static PAYLOAD_CODECS: LazyLock<FxHashMap<u16, PayloadCodec>> = LazyLock::new(|| {
    use RecordType as T;

    let mut table = FxHashMap::default();
    let mut register = |record_type: RecordType, min_len: usize, encode: EncodeFn, decode: DecodeFn| {
        table.insert(
            u16::from(record_type),
            PayloadCodec {
                record_type,
                min_len,
                encode,
                decode,
            },
        );
    };

    register(T::ZERO, 8, address::encode_tombstone, address::decode_tombstone);
    register(T::A, 4, address::encode_address, address::decode_a);
    register(T::AAAA, 16, address::encode_address, address::decode_aaaa);

    for name_type in [T::NS, T::MD, T::MF, T::CNAME, T::MB, T::MG, T::MR, T::PTR, T::DNAME] {
        register(name_type, 1, names::encode_name, names::decode_name);
    }

    register(T::SOA, 22, compound::encode_soa, compound::decode_soa);
    register(T::NULL, 0, opaque::encode_raw, opaque::decode_null);
    register(T::WKS, 5, compound::encode_wks, compound::decode_wks);
    register(T::HINFO, 2, strings::encode_strings, strings::decode_strings);
    register(T::MINFO, 2, compound::encode_mail_error, compound::decode_mail_error);
    register(T::MX, 3, compound::encode_preference, compound::decode_preference);
    register(T::TXT, 1, strings::encode_strings, strings::decode_strings);
    register(T::RP, 2, compound::encode_mail_error, compound::decode_mail_error);
    register(T::AFSDB, 3, compound::encode_preference, compound::decode_preference);
    register(T::X25, 1, strings::encode_strings, strings::decode_strings);
    register(T::ISDN, 1, strings::encode_strings, strings::decode_strings);
    register(T::RT, 3, compound::encode_preference, compound::decode_preference);
    register(T::SIG, 19, dnssec::encode_sig, dnssec::decode_sig);
    register(T::KEY, 4, dnssec::encode_key, dnssec::decode_key);
    register(T::NXT, 3, compound::encode_nxt, compound::decode_nxt);
    register(T::SRV, 7, compound::encode_srv, compound::decode_srv);
    register(T::ATMA, 1, compound::encode_atma, compound::decode_atma);
    register(T::NAPTR, 8, compound::encode_naptr, compound::decode_naptr);
    register(T::DS, 4, dnssec::encode_ds, dnssec::decode_ds);
    register(T::RRSIG, 19, dnssec::encode_sig, dnssec::decode_sig);
    register(T::NSEC, 1, dnssec::encode_nsec, dnssec::decode_nsec);
    register(T::DNSKEY, 4, dnssec::encode_key, dnssec::decode_key);
    register(T::DHCID, 0, opaque::encode_raw, opaque::decode_dhcid);
    register(T::NSEC3, 6, dnssec::encode_nsec3, dnssec::decode_nsec3);
    register(T::NSEC3PARAM, 5, dnssec::encode_nsec3param, dnssec::decode_nsec3param);
    register(T::TLSA, 3, dnssec::encode_tlsa, dnssec::decode_tlsa);
    register(T::WINS, 16, wins::encode_wins, wins::decode_wins);
    register(T::WINSR, 13, wins::encode_wins_r, wins::decode_wins_r);

    table
});

/// Looks up the codec for a type; unregistered codes get the opaque codec.
pub fn payload_codec(record_type: RecordType) -> &'static PayloadCodec {
    PAYLOAD_CODECS
        .get(&u16::from(record_type))
        .unwrap_or(&OPAQUE_CODEC)
}
