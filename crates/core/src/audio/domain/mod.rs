pub mod audio_transcoder;
