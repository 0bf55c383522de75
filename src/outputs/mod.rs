pub mod mock_audio;
pub mod sfx;
