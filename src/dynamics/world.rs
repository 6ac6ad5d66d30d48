use crate::collision::{Contact, PairKey, resolve_with_config};
use crate::dynamics::body::VELOCITY_DAMPING;
use crate::dynamics::{Body, BodyDef, Boundary, InvalidBodySpec};
use crate::math::Vec2;

/// Stable body identifier. Handles are never reused within a world.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub usize);

#[derive(Copy, Clone, Debug)]
pub struct WorldConfig {
    /// Velocity multiplier applied once per tick after acceleration.
    pub damping: f32,
    pub position_correction: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            damping: VELOCITY_DAMPING,
            position_correction: true,
        }
    }
}

pub struct World {
    pub config: WorldConfig,
    boundary: Boundary,
    bodies: Vec<Body>,
    handles: Vec<BodyHandle>,
    next_handle: usize,
    contacts: Vec<(PairKey, Contact)>,
    tick_count: u64,
}

impl World {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            config: WorldConfig::default(),
            boundary: Boundary::new(width, height),
            bodies: Vec::new(),
            handles: Vec::new(),
            next_handle: 0,
            contacts: Vec::new(),
            tick_count: 0,
        }
    }

    pub fn with_config(width: f32, height: f32, config: WorldConfig) -> Self {
        Self {
            config,
            ..Self::new(width, height)
        }
    }

    pub fn add_body(&mut self, def: BodyDef) -> Result<BodyHandle, InvalidBodySpec> {
        let body = Body::from_def(def)?;
        if !(0.0..=1.0).contains(&body.restitution) {
            log::debug!("body restitution {} outside [0, 1]", body.restitution);
        }

        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;
        self.bodies.push(body);
        self.handles.push(handle);

        log::debug!(
            "added body {:?}: r={} at ({}, {})",
            handle,
            body.radius(),
            body.position.x,
            body.position.y
        );
        Ok(handle)
    }

    /// Removes the body if it is still alive. Order of the survivors is kept.
    pub fn remove_body(&mut self, h: BodyHandle) -> Option<Body> {
        let index = self.index_of(h)?;
        self.handles.remove(index);
        let body = self.bodies.remove(index);
        log::debug!("removed body {:?}", h);
        Some(body)
    }

    /// Removes every body whose disc contains `point`, overlapping ones included.
    pub fn remove_at(&mut self, point: Vec2) -> Vec<BodyHandle> {
        let mut removed = Vec::new();
        for i in (0..self.bodies.len()).rev() {
            if self.bodies[i].contains(point) {
                self.bodies.remove(i);
                removed.push(self.handles.remove(i));
            }
        }
        removed.reverse();

        if !removed.is_empty() {
            log::debug!("removed {} bodies at ({}, {})", removed.len(), point.x, point.y);
        }
        removed
    }

    pub fn set_boundary(&mut self, width: f32, height: f32) {
        self.boundary = Boundary::new(width, height);
        log::debug!("boundary set to {}x{}", width, height);

        if let Some(b) = self.bodies.iter().find(|b| !self.boundary.fits(b.radius())) {
            log::warn!(
                "boundary {}x{} is smaller than a body of radius {}",
                width,
                height,
                b.radius()
            );
        }
    }

    #[inline]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn body(&self, h: BodyHandle) -> Option<&Body> {
        let i = self.index_of(h)?;
        Some(&self.bodies[i])
    }

    pub fn body_mut(&mut self, h: BodyHandle) -> Option<&mut Body> {
        let i = self.index_of(h)?;
        Some(&mut self.bodies[i])
    }

    /// Live bodies in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.handles.iter().copied().zip(self.bodies.iter())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Contacts resolved during the last tick, in resolution order.
    #[inline]
    pub fn contacts(&self) -> &[(PairKey, Contact)] {
        &self.contacts
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Drops every body and resets the tick counter. Handles stay unique.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.handles.clear();
        self.contacts.clear();
        self.tick_count = 0;
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.bodies
            .iter()
            .fold(Vec2::ZERO, |acc, b| acc + b.momentum())
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Advance one fixed step: integrate every body against the boundary,
    /// then resolve each unordered pair in `(0,1), (0,2), .., (1,2), ..` order.
    ///
    /// Three or more simultaneously overlapping bodies are resolved one pair at
    /// a time in that order, so the outcome depends on insertion order.
    pub fn tick(&mut self) {
        self.contacts.clear();

        // Split world so we can borrow parts at the same time.
        let World {
            config,
            boundary,
            bodies,
            handles,
            contacts,
            ..
        } = self;

        for b in bodies.iter_mut() {
            b.integrate_damped(*boundary, config.damping);
        }

        let n = bodies.len();
        for i in 0..n {
            for j in i + 1..n {
                let (bi, bj) = pair_mut(bodies, i, j);
                if let Some(contact) = resolve_with_config(bi, bj, config) {
                    let key = PairKey::new(handles[i], handles[j]);
                    log::trace!(
                        "contact {:?}-{:?}: overlap={} impulse={}",
                        key.body1,
                        key.body2,
                        contact.overlap,
                        contact.impulse
                    );
                    contacts.push((key, contact));
                }
            }
        }

        self.tick_count += 1;
    }

    fn index_of(&self, h: BodyHandle) -> Option<usize> {
        // Handles are allocated in increasing order and removal keeps order.
        self.handles.binary_search(&h).ok()
    }
}

/// Mutable access to two distinct bodies, `i < j`.
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    assert!(i < j, "pair_mut requires i < j");

    let (left, right) = bodies.split_at_mut(j);
    (&mut left[i], &mut right[0])
}
