use dnsp_record_application::ports::{RecordCodec, RecordTextParser};
use dnsp_record_application::use_cases::{DecodeRecordUseCase, NewRecordFromTextUseCase};
use dnsp_record_domain::Config;
use dnsp_record_infrastructure::text::ZoneTextParser;
use dnsp_record_infrastructure::wire::WireRecordCodec;
use std::sync::Arc;

pub struct UseCases {
    pub new_from_text: Arc<NewRecordFromTextUseCase>,
    pub decode: Arc<DecodeRecordUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let codec: Arc<dyn RecordCodec> = Arc::new(WireRecordCodec::from_config(&config.codec));
        let parser: Arc<dyn RecordTextParser> = Arc::new(ZoneTextParser::from_config(&config.codec));

        Self {
            new_from_text: Arc::new(NewRecordFromTextUseCase::new(parser, codec.clone())),
            decode: Arc::new(DecodeRecordUseCase::new(codec)),
        }
    }
}
