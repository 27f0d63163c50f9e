pub mod plain_text;
pub mod srt;
pub mod timecode;
