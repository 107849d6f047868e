use super::display::{DisplayReading, DisplaySource};
use super::state::ViewportState;

/// Handle returned by [`ViewportTracker::subscribe`].
///
/// Unique per tracker; ids are never reused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ViewportState)>;

/// Owns the current viewport state and republishes resize notifications.
///
/// Listeners receive a shared borrow of the tracker's state after it has been
/// updated; they run inline, in registration order, once per
/// [`on_resize`](Self::on_resize). A listener cannot reach the tracker
/// mutably, so it cannot trigger a nested resize.
pub struct ViewportTracker {
    state: ViewportState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ViewportTracker {
    /// Reads the current size and density from `display`.
    pub fn initialize(display: &impl DisplaySource) -> Self {
        let DisplayReading { width, height, device_pixel_ratio } = display.reading();
        let state = ViewportState::from_raw(width, height, device_pixel_ratio);

        log::info!(
            "viewport init | width: {}, height: {}, pixel ratio: {}",
            state.width,
            state.height,
            state.pixel_ratio
        );

        Self {
            state,
            listeners: Vec::new(),
            next_id: 1,
        }
    }

    /// Applies a resize reported by the host and notifies every listener.
    pub fn on_resize(&mut self, width: u32, height: u32, raw_pixel_ratio: f64) {
        self.state = ViewportState::from_raw(width, height, raw_pixel_ratio);

        log::debug!(
            "viewport resize | width: {}, height: {}, pixel ratio: {}",
            self.state.width,
            self.state.height,
            self.state.pixel_ratio
        );

        // Split borrow: listeners are mutated while state is only read.
        let state = &self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
    }

    /// Convenience for hosts holding a [`DisplayReading`].
    #[inline]
    pub fn apply(&mut self, reading: DisplayReading) {
        self.on_resize(reading.width, reading.height, reading.device_pixel_ratio);
    }

    /// Registers `listener` for every future resize.
    ///
    /// The same closure logic may be registered more than once; each
    /// registration is invoked separately.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ViewportState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when `id` was unknown or already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.listeners.iter().position(|(lid, _)| *lid == id) {
            Some(index) => {
                // `remove` keeps the remaining listeners in registration order.
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.state.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.state.height
    }

    #[inline]
    pub fn pixel_ratio(&self) -> f32 {
        self.state.pixel_ratio
    }

    #[inline]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for ViewportTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportTracker")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
