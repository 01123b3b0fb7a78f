//! Control intents and the queue that carries them to the render loop
//!
//! Input handlers push intents from any context; the control loop drains
//! them between frames, so settings never change while a frame renders.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::effect::EffectId;

/// A requested change of the user-adjustable parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIntent {
    /// Cycle to the next effect
    NextEffect,
    /// Jump to a specific effect
    SetEffect(EffectId),
    SpeedUp,
    SpeedDown,
    BrightnessUp,
    BrightnessDown,
}

/// Navigation keys of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    Select,
    Up,
    Down,
}

/// Translates navigation key edges into intents
///
/// SELECT acts as a modifier: UP/DOWN while it is held change brightness
/// instead of speed, and releasing it only cycles the effect when no
/// UP/DOWN happened during the hold.
#[derive(Debug, Clone, Copy)]
pub struct NavigationMapper {
    select_held: bool,
    cycle_on_release: bool,
}

impl NavigationMapper {
    pub const fn new() -> Self {
        Self {
            select_held: false,
            cycle_on_release: true,
        }
    }

    /// Handle a key press (`pressed = true`) or release
    pub fn on_key(&mut self, key: NavigationKey, pressed: bool) -> Option<ControlIntent> {
        match (key, pressed) {
            (NavigationKey::Select, true) => {
                self.select_held = true;
                self.cycle_on_release = true;
                None
            }
            (NavigationKey::Select, false) => {
                self.select_held = false;
                self.cycle_on_release.then_some(ControlIntent::NextEffect)
            }
            (NavigationKey::Up, true) if self.select_held => {
                self.cycle_on_release = false;
                Some(ControlIntent::BrightnessUp)
            }
            (NavigationKey::Down, true) if self.select_held => {
                self.cycle_on_release = false;
                Some(ControlIntent::BrightnessDown)
            }
            (NavigationKey::Up, true) => Some(ControlIntent::SpeedUp),
            (NavigationKey::Down, true) => Some(ControlIntent::SpeedDown),
            (NavigationKey::Up | NavigationKey::Down, false) => None,
        }
    }

    pub const fn is_select_held(&self) -> bool {
        self.select_held
    }
}

impl Default for NavigationMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when the queue has no room for another intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub ControlIntent);

/// Bounded intent queue guarded by a critical section
pub struct IntentQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ControlIntent, SIZE>>>,
}

impl<const SIZE: usize> IntentQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { queue: self }
    }

    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { queue: self }
    }

    /// Queue an intent, handing it back if the queue is full
    pub fn push(&self, intent: ControlIntent) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(intent).map_err(QueueFull)
        })
    }

    /// Take the oldest queued intent
    pub fn pop(&self) -> Option<ControlIntent> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for IntentQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of an [`IntentQueue`]
#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    queue: &'a IntentQueue<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    pub fn send(&self, intent: ControlIntent) -> Result<(), QueueFull> {
        self.queue.push(intent)
    }
}

/// Consumer side of an [`IntentQueue`]
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    queue: &'a IntentQueue<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<ControlIntent> {
        self.queue.pop()
    }
}
