//! Audio playback engine - WAV clip decoding and cpal output.
//!
//! The generation service returns finished episode audio as a byte blob.
//! [`AudioClip::from_wav_bytes`] decodes 16-bit PCM WAV into interleaved
//! f32 samples; [`AudioPlayer`] plays a clip on the default output device.
//!
//! Playback is pull-based: the cpal callback reads from a shared cursor
//! behind a `parking_lot` mutex and writes silence once the clip runs out.
//! The stream itself lives on the UI thread inside the player; dropping the
//! player (or calling [`AudioPlayer::stop`]) tears the stream down.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;

/// Errors from clip decoding or audio output
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("not a RIFF/WAVE stream")]
    NotWav,
    #[error("truncated WAV data")]
    Truncated,
    #[error("unsupported WAV encoding (format {format}, {bits} bits)")]
    UnsupportedEncoding { format: u16, bits: u16 },
    #[error("WAV stream has no audio frames")]
    EmptyClip,
    #[error("no audio output device available")]
    NoOutputDevice,
    #[error("failed to open output stream: {0}")]
    StreamBuild(String),
    #[error("failed to start output stream: {0}")]
    StreamPlay(String),
}

/// Decoded audio clip, interleaved f32 samples
#[derive(Clone, Debug)]
pub struct AudioClip {
    samples: Arc<Vec<f32>>,
    sample_rate: u32,
    channels: u16,
}

impl AudioClip {
    /// Decode a 16-bit PCM WAV byte stream.
    ///
    /// Walks the RIFF chunk list for `fmt ` and `data`; anything that is
    /// not plain PCM16 is rejected rather than guessed at.
    pub fn from_wav_bytes(bytes: &[u8]) -> Result<Self, AudioError> {
        if bytes.len() < 12 || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
            return Err(AudioError::NotWav);
        }

        let mut fmt: Option<(u16, u16, u32, u16)> = None; // format, channels, rate, bits
        let mut data: Option<&[u8]> = None;

        let mut pos = 12;
        while pos + 8 <= bytes.len() {
            let chunk_id = &bytes[pos..pos + 4];
            let chunk_len = read_u32_le(bytes, pos + 4)? as usize;
            let body_start = pos + 8;
            let body_end = body_start
                .checked_add(chunk_len)
                .ok_or(AudioError::Truncated)?;
            if body_end > bytes.len() {
                return Err(AudioError::Truncated);
            }
            let body = &bytes[body_start..body_end];

            match chunk_id {
                b"fmt " => {
                    if body.len() < 16 {
                        return Err(AudioError::Truncated);
                    }
                    fmt = Some((
                        read_u16_le(body, 0)?,
                        read_u16_le(body, 2)?,
                        read_u32_le(body, 4)?,
                        read_u16_le(body, 14)?,
                    ));
                }
                b"data" => {
                    data = Some(body);
                }
                _ => {}
            }

            // Chunks are word-aligned
            pos = body_end + (chunk_len & 1);
        }

        let (format, channels, sample_rate, bits) = fmt.ok_or(AudioError::NotWav)?;
        let data = data.ok_or(AudioError::NotWav)?;

        if format != 1 || bits != 16 {
            return Err(AudioError::UnsupportedEncoding { format, bits });
        }
        if channels == 0 || sample_rate == 0 {
            return Err(AudioError::UnsupportedEncoding { format, bits });
        }

        let samples: Vec<f32> = data
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
            .collect();

        if samples.is_empty() {
            return Err(AudioError::EmptyClip);
        }

        Ok(Self {
            samples: Arc::new(samples),
            sample_rate,
            channels,
        })
    }

    /// Clip length in seconds
    pub fn duration_secs(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Number of audio frames (samples per channel)
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Channel count
    pub fn channels(&self) -> u16 {
        self.channels
    }
}

/// Shared playback position, read by the audio callback
struct PlaybackCursor {
    samples: Arc<Vec<f32>>,
    channels: u16,
    frame: usize,
    finished: bool,
}

/// Plays one [`AudioClip`] at a time on the default output device
pub struct AudioPlayer {
    stream: Option<cpal::Stream>,
    cursor: Arc<Mutex<PlaybackCursor>>,
}

impl AudioPlayer {
    pub fn new() -> Self {
        Self {
            stream: None,
            cursor: Arc::new(Mutex::new(PlaybackCursor {
                samples: Arc::new(Vec::new()),
                channels: 1,
                frame: 0,
                finished: true,
            })),
        }
    }

    /// Start playing a clip from the beginning, replacing any current one.
    pub fn play(&mut self, clip: &AudioClip) -> Result<(), AudioError> {
        self.stop();

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;
        let default_config = device
            .default_output_config()
            .map_err(|e| AudioError::StreamBuild(e.to_string()))?;

        let out_channels = default_config.channels();
        let config = cpal::StreamConfig {
            channels: out_channels,
            sample_rate: cpal::SampleRate(clip.sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        {
            let mut cursor = self.cursor.lock();
            cursor.samples = clip.samples.clone();
            cursor.channels = clip.channels;
            cursor.frame = 0;
            cursor.finished = false;
        }

        let cursor = Arc::clone(&self.cursor);
        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    fill_output(data, out_channels as usize, &cursor);
                },
                |err| {
                    ::log::error!("Audio output stream error: {}", err);
                },
                None,
            )
            .map_err(|e| AudioError::StreamBuild(e.to_string()))?;

        stream
            .play()
            .map_err(|e| AudioError::StreamPlay(e.to_string()))?;

        ::log::info!(
            "Playing clip: {:.1}s, {} Hz, {} ch",
            clip.duration_secs(),
            clip.sample_rate,
            clip.channels
        );

        self.stream = Some(stream);
        Ok(())
    }

    /// Stop playback and drop the output stream.
    pub fn stop(&mut self) {
        self.stream = None;
        let mut cursor = self.cursor.lock();
        cursor.frame = 0;
        cursor.finished = true;
    }

    /// Whether a clip is currently being played out.
    ///
    /// Turns false on its own once the clip's last frame has been handed to
    /// the device.
    pub fn is_playing(&self) -> bool {
        self.stream.is_some() && !self.cursor.lock().finished
    }
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill one output buffer from the cursor, mapping clip channels onto the
/// device channel count and padding with silence past the end of the clip.
fn fill_output(data: &mut [f32], out_channels: usize, cursor: &Arc<Mutex<PlaybackCursor>>) {
    let mut cursor = cursor.lock();
    let clip_channels = cursor.channels as usize;
    let total_frames = cursor.samples.len() / clip_channels;

    for frame in data.chunks_mut(out_channels) {
        if cursor.frame >= total_frames {
            cursor.finished = true;
            for sample in frame.iter_mut() {
                *sample = 0.0;
            }
            continue;
        }
        let base = cursor.frame * clip_channels;
        for (ch, sample) in frame.iter_mut().enumerate() {
            let src = base + ch.min(clip_channels - 1);
            *sample = cursor.samples[src];
        }
        cursor.frame += 1;
    }
}

fn read_u16_le(bytes: &[u8], pos: usize) -> Result<u16, AudioError> {
    let slice = bytes.get(pos..pos + 2).ok_or(AudioError::Truncated)?;
    Ok(u16::from_le_bytes([slice[0], slice[1]]))
}

fn read_u32_le(bytes: &[u8], pos: usize) -> Result<u32, AudioError> {
    let slice = bytes.get(pos..pos + 4).ok_or(AudioError::Truncated)?;
    Ok(u32::from_le_bytes([slice[0], slice[1], slice[2], slice[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a minimal PCM16 WAV blob around the given samples
    fn wav_bytes(samples: &[i16], sample_rate: u32, channels: u16) -> Vec<u8> {
        let data_size = (samples.len() * 2) as u32;
        let byte_rate = sample_rate * channels as u32 * 2;
        let block_align = channels * 2;

        let mut wav = Vec::with_capacity(44 + samples.len() * 2);
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_size).to_le_bytes());
        wav.extend_from_slice(b"WAVE");
        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&channels.to_le_bytes());
        wav.extend_from_slice(&sample_rate.to_le_bytes());
        wav.extend_from_slice(&byte_rate.to_le_bytes());
        wav.extend_from_slice(&block_align.to_le_bytes());
        wav.extend_from_slice(&16u16.to_le_bytes());
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_size.to_le_bytes());
        for sample in samples {
            wav.extend_from_slice(&sample.to_le_bytes());
        }
        wav
    }

    #[test]
    fn test_decode_mono_wav() {
        let bytes = wav_bytes(&[0, 16384, -16384, 32767], 22050, 1);
        let clip = AudioClip::from_wav_bytes(&bytes).unwrap();

        assert_eq!(clip.sample_rate(), 22050);
        assert_eq!(clip.channels(), 1);
        assert_eq!(clip.frame_count(), 4);
        assert!((clip.samples[1] - 0.5).abs() < 0.001);
        assert!((clip.samples[2] + 0.5).abs() < 0.001);
    }

    #[test]
    fn test_decode_stereo_frame_count() {
        let bytes = wav_bytes(&[1, 2, 3, 4, 5, 6], 44100, 2);
        let clip = AudioClip::from_wav_bytes(&bytes).unwrap();

        assert_eq!(clip.channels(), 2);
        assert_eq!(clip.frame_count(), 3);
    }

    #[test]
    fn test_duration() {
        let samples = vec![0i16; 22050];
        let bytes = wav_bytes(&samples, 22050, 1);
        let clip = AudioClip::from_wav_bytes(&bytes).unwrap();

        assert!((clip.duration_secs() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_rejects_non_wav() {
        assert!(matches!(
            AudioClip::from_wav_bytes(b"ID3\x04not a wav at all"),
            Err(AudioError::NotWav)
        ));
        assert!(matches!(
            AudioClip::from_wav_bytes(b""),
            Err(AudioError::NotWav)
        ));
    }

    #[test]
    fn test_rejects_truncated_data_chunk() {
        let mut bytes = wav_bytes(&[0, 1, 2, 3], 22050, 1);
        bytes.truncate(bytes.len() - 3);
        assert!(matches!(
            AudioClip::from_wav_bytes(&bytes),
            Err(AudioError::Truncated)
        ));
    }

    #[test]
    fn test_rejects_float_encoding() {
        let mut bytes = wav_bytes(&[0, 1], 22050, 1);
        // Patch the audio format field (offset 20) to IEEE float
        bytes[20] = 3;
        assert!(matches!(
            AudioClip::from_wav_bytes(&bytes),
            Err(AudioError::UnsupportedEncoding { format: 3, bits: 16 })
        ));
    }

    #[test]
    fn test_skips_unknown_chunks() {
        // LIST chunk between fmt and data should be walked over
        let inner = wav_bytes(&[7, 8], 22050, 1);
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&inner[..36]); // RIFF header + fmt chunk
        bytes.extend_from_slice(b"LIST");
        bytes.extend_from_slice(&4u32.to_le_bytes());
        bytes.extend_from_slice(b"INFO");
        bytes.extend_from_slice(&inner[36..]); // data chunk
        // Fix the RIFF size field
        let riff_size = (bytes.len() - 8) as u32;
        bytes[4..8].copy_from_slice(&riff_size.to_le_bytes());

        let clip = AudioClip::from_wav_bytes(&bytes).unwrap();
        assert_eq!(clip.frame_count(), 2);
    }
}
