use data_encoding::HEXLOWER;
use dnsp_record_application::dto::RpcRecord;
use dnsp_record_domain::{ResourceRecord, WireRecord};

pub fn render_encoded(record: WireRecord, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(RpcRecord::from(record).to_json()?);
    }
    Ok(HEXLOWER.encode(&record.to_bytes()))
}

pub fn render_decoded(record: &ResourceRecord, json: bool) -> anyhow::Result<String> {
    if json {
        let value = serde_json::json!({
            "type": record.record_type.to_string(),
            "code": record.record_type.to_u16(),
            "ttl": record.ttl,
            "data": record.data.to_string(),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    Ok(format!("{} {} {}", record.record_type, record.ttl, record.data))
}
