/// Handle for a scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequestId(pub u64);

/// Handle for a registered viewport-resize listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Host services the animation driver needs.
///
/// Mirrors a browser window: one-shot frame callbacks, resize listeners and display metrics.
/// The host delivers a scheduled frame by calling [`crate::AnimationDriver::tick`] and a
/// resize by calling [`crate::AnimationDriver::handle_resize`].
pub trait Platform {
    /// Current container width in display units.
    fn container_width(&self) -> f64;
    /// Current device pixel ratio.
    fn device_pixel_ratio(&self) -> f64;
    /// Schedule one frame callback.
    fn request_frame(&mut self) -> FrameRequestId;
    /// Cancel a scheduled callback. Unknown or already-fired ids are ignored.
    fn cancel_frame(&mut self, id: FrameRequestId);
    /// Start delivering resize notifications.
    fn add_resize_listener(&mut self) -> ListenerId;
    /// Stop delivering resize notifications.
    fn remove_resize_listener(&mut self, id: ListenerId);
}

/// In-process platform with a virtual viewport. Frame callbacks fire when the owner asks.
#[derive(Debug)]
pub struct HeadlessPlatform {
    container_width: f64,
    device_pixel_ratio: f64,
    next_id: u64,
    pending: Option<FrameRequestId>,
    listeners: Vec<ListenerId>,
    frames_requested: u64,
    frames_cancelled: u64,
}

impl HeadlessPlatform {
    /// Viewport of the given width and pixel ratio.
    pub fn new(container_width: f64, device_pixel_ratio: f64) -> Self {
        Self {
            container_width,
            device_pixel_ratio,
            next_id: 1,
            pending: None,
            listeners: Vec::new(),
            frames_requested: 0,
            frames_cancelled: 0,
        }
    }

    /// Scheduled callback not yet fired or cancelled.
    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.pending
    }

    /// Consume the scheduled callback, as the host does right before invoking it.
    pub fn fire_frame(&mut self) -> Option<FrameRequestId> {
        self.pending.take()
    }

    /// Change the viewport. Returns `true` when a listener should be notified.
    pub fn resize(&mut self, container_width: f64, device_pixel_ratio: f64) -> bool {
        self.container_width = container_width;
        self.device_pixel_ratio = device_pixel_ratio;
        !self.listeners.is_empty()
    }

    /// Currently registered resize listeners.
    pub fn resize_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Total frame requests made.
    pub fn frames_requested(&self) -> u64 {
        self.frames_requested
    }

    /// Total effective cancellations (ids that were still pending).
    pub fn frames_cancelled(&self) -> u64 {
        self.frames_cancelled
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Platform for HeadlessPlatform {
    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn request_frame(&mut self) -> FrameRequestId {
        let id = FrameRequestId(self.next_id());
        self.pending = Some(id);
        self.frames_requested += 1;
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        if self.pending == Some(id) {
            self.pending = None;
            self.frames_cancelled += 1;
        }
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listeners.push(id);
        id
    }

    fn remove_resize_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|l| *l != id);
    }
}
