/// Looping GIF playback
///
/// iced's image widget only draws the first frame of a GIF, so animations
/// are decoded up front into RGBA frames and stepped by a timer.

use iced::widget::image::Handle;
use image::{AnimationDecoder, Delay};
use std::path::Path;
use std::time::Duration;

use crate::error::AssetError;

/// Delays below this are treated as unspecified (browsers do the same)
const MIN_FRAME_DELAY: Duration = Duration::from_millis(20);

/// Delay used when a frame's own delay is unspecified
const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

/// Upper bound on decoded RGBA bytes kept per animation (frames past it are dropped)
const MAX_ANIMATION_BYTES: usize = 256 * 1024 * 1024;

/// One decoded frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub handle: Handle,
    pub delay: Duration,
}

/// A decoded animation plus its playback position
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<Frame>,
    current: usize,
    /// Time already spent on `current`
    elapsed: Duration,
}

impl Animation {
    /// Build from frames, starting at the first one
    pub fn new(mut frames: Vec<Frame>) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }

        // A zero delay would never let `advance` finish
        for frame in frames.iter_mut().filter(|f| f.delay.is_zero()) {
            frame.delay = DEFAULT_FRAME_DELAY;
        }

        Some(Self {
            frames,
            current: 0,
            elapsed: Duration::ZERO,
        })
    }

    /// Decode the frames of a GIF held in memory
    ///
    /// Frames stay decoded for the whole run, so decoding stops once
    /// `MAX_ANIMATION_BYTES` is reached and the animation loops over what fit.
    pub fn decode_gif(path: &Path, bytes: &[u8]) -> Result<Self, AssetError> {
        Self::decode_gif_within(path, bytes, MAX_ANIMATION_BYTES)
    }

    fn decode_gif_within(path: &Path, bytes: &[u8], budget: usize) -> Result<Self, AssetError> {
        let decode_err = |source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let decoder =
            image::codecs::gif::GifDecoder::new(std::io::Cursor::new(bytes)).map_err(decode_err)?;

        let mut frames = Vec::new();
        let mut used = 0usize;
        for frame in decoder.into_frames() {
            let frame = frame.map_err(decode_err)?;
            let delay = frame_delay(frame.delay());
            let buffer = frame.into_buffer();
            let size = buffer.as_raw().len();

            // Always keep the first frame
            if !frames.is_empty() && used + size > budget {
                log::warn!(
                    "⚠️  {} exceeds {} bytes of decoded frames; looping the first {}",
                    path.display(),
                    budget,
                    frames.len()
                );
                break;
            }

            used += size;
            let (width, height) = buffer.dimensions();
            frames.push(Frame {
                handle: Handle::from_rgba(width, height, buffer.into_raw()),
                delay,
            });
        }

        Self::new(frames).ok_or_else(|| AssetError::NoFrames(path.to_path_buf()))
    }

    /// Handle of the frame currently on screen
    pub fn handle(&self) -> &Handle {
        &self.frames[self.current].handle
    }

    #[cfg(test)]
    pub fn current_frame(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Whether playback needs a timer at all
    pub fn is_animated(&self) -> bool {
        self.frames.len() > 1
    }

    /// Move playback forward by `dt`, wrapping to the first frame at the end
    pub fn advance(&mut self, dt: Duration) {
        if !self.is_animated() {
            return;
        }

        self.elapsed += dt;
        while self.elapsed >= self.frames[self.current].delay {
            self.elapsed -= self.frames[self.current].delay;
            self.current = (self.current + 1) % self.frames.len();
        }
    }
}

fn frame_delay(delay: Delay) -> Duration {
    let delay = Duration::from(delay);
    if delay < MIN_FRAME_DELAY {
        DEFAULT_FRAME_DELAY
    } else {
        delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_gif;

    fn frames(delays_ms: &[u64]) -> Vec<Frame> {
        delays_ms
            .iter()
            .map(|&ms| Frame {
                handle: Handle::from_rgba(1, 1, vec![0u8, 0, 0, 255]),
                delay: Duration::from_millis(ms),
            })
            .collect()
    }

    #[test]
    fn test_empty_is_rejected() {
        assert!(Animation::new(Vec::new()).is_none());
    }

    #[test]
    fn test_advance_steps_and_loops() {
        let mut animation = Animation::new(frames(&[100, 50, 100])).unwrap();
        assert_eq!(animation.current_frame(), 0);

        animation.advance(Duration::from_millis(99));
        assert_eq!(animation.current_frame(), 0);

        animation.advance(Duration::from_millis(1));
        assert_eq!(animation.current_frame(), 1);

        // Crosses frame 1 and frame 2 in one step, back to the start
        animation.advance(Duration::from_millis(150));
        assert_eq!(animation.current_frame(), 0);
    }

    #[test]
    fn test_single_frame_never_moves() {
        let mut animation = Animation::new(frames(&[100])).unwrap();
        assert!(!animation.is_animated());
        animation.advance(Duration::from_secs(10));
        assert_eq!(animation.current_frame(), 0);
    }

    #[test]
    fn test_tiny_delays_are_normalized() {
        assert_eq!(
            frame_delay(Delay::from_numer_denom_ms(0, 1)),
            DEFAULT_FRAME_DELAY
        );
        assert_eq!(
            frame_delay(Delay::from_numer_denom_ms(70, 1)),
            Duration::from_millis(70)
        );
    }

    #[test]
    fn test_decode_gif_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loop.gif");
        write_gif(&path, 3);

        let bytes = std::fs::read(&path).unwrap();
        let animation = Animation::decode_gif(&path, &bytes).unwrap();
        assert_eq!(animation.frame_count(), 3);
        assert!(animation.is_animated());
    }

    #[test]
    fn test_decode_stops_at_byte_budget() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.gif");
        write_gif(&path, 4);
        let bytes = std::fs::read(&path).unwrap();

        // Fixture frames are 4×4 RGBA = 64 bytes each
        let animation = Animation::decode_gif_within(&path, &bytes, 130).unwrap();
        assert_eq!(animation.frame_count(), 2);

        // A first frame over budget is still kept
        let animation = Animation::decode_gif_within(&path, &bytes, 1).unwrap();
        assert_eq!(animation.frame_count(), 1);
        assert!(!animation.is_animated());
    }

    #[test]
    fn test_decode_garbage_fails() {
        let path = Path::new("broken.gif");
        let err = Animation::decode_gif(path, b"not a gif").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }
}
