//! Parallel spring groups with join-on-completion semantics.

use super::spring::{Spring, SpringParams};

/// Which animated scalar a spring in a group drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Camera-to-feed morph progress in `[0, 1]`.
    Progress,
    /// Vertical offset of the top layer in pixels.
    TopOffset,
}

#[derive(Debug, Clone, Copy)]
struct Track {
    channel: Channel,
    spring: Spring,
}

/// A set of springs started together whose completion is awaited jointly.
///
/// [`step`](Self::step) reports completion only once every member is at
/// rest; members that settle early hold their target until the rest catch
/// up.
#[derive(Debug, Clone, Default)]
pub struct AnimationGroup {
    tracks: Vec<Track>,
}

impl AnimationGroup {
    /// Empty group. An empty group is complete on its first step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a spring driving `channel` from `from` to `to`.
    ///
    /// A later spring on the same channel supersedes the earlier one.
    #[must_use]
    pub fn with(
        mut self,
        channel: Channel,
        from: f32,
        to: f32,
        params: SpringParams,
    ) -> Self {
        self.tracks.retain(|track| track.channel != channel);
        self.tracks.push(Track {
            channel,
            spring: Spring::new(from, to, params),
        });
        self
    }

    /// Advance every member by `dt` seconds. Returns `true` when all
    /// members are at rest.
    pub fn step(&mut self, dt: f32) -> bool {
        let mut all_at_rest = true;
        for track in &mut self.tracks {
            all_at_rest &= track.spring.step(dt);
        }
        all_at_rest
    }

    /// Jump every member to its target.
    pub fn finish(&mut self) {
        for track in &mut self.tracks {
            track.spring.finish();
        }
    }

    /// Whether every member is at rest.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tracks.iter().all(|track| track.spring.is_at_rest())
    }

    /// Current value of each channel.
    pub fn values(&self) -> impl Iterator<Item = (Channel, f32)> + '_ {
        self.tracks
            .iter()
            .map(|track| (track.channel, track.spring.value()))
    }

    /// Current value of one channel, if the group drives it.
    #[must_use]
    pub fn value(&self, channel: Channel) -> Option<f32> {
        self.tracks
            .iter()
            .find(|track| track.channel == channel)
            .map(|track| track.spring.value())
    }
}
