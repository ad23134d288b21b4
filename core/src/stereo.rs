#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Left,
    Right,
}

/// A pair of values, one per ear.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stereo<L, R> {
    pub left: L,
    pub right: R,
}

impl<L, R> Stereo<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn map<OL, FL, OR, FR>(self, fl: FL, fr: FR) -> Stereo<OL, OR>
    where
        FL: FnOnce(L) -> OL,
        FR: FnOnce(R) -> OR,
    {
        Stereo {
            left: fl(self.left),
            right: fr(self.right),
        }
    }

    pub fn map_ref<'a, OL, FL, OR, FR>(
        &'a self,
        fl: FL,
        fr: FR,
    ) -> Stereo<OL, OR>
    where
        FL: FnOnce(&'a L) -> OL,
        FR: FnOnce(&'a R) -> OR,
    {
        Stereo {
            left: fl(&self.left),
            right: fr(&self.right),
        }
    }
}

impl<T> Stereo<T, T> {
    pub fn get(&self, channel: Channel) -> &T {
        match channel {
            Channel::Left => &self.left,
            Channel::Right => &self.right,
        }
    }
}
