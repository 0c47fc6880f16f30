//! Named bus registry
//!
//! Lets code that only knows a bus by name (e.g. from configuration) find
//! the handle. The registry is an ordinary value: create it at init, pass it
//! to whoever needs lookups, and tear it down with
//! [`into_handles`](Registry::into_handles). Lookup is linear in insertion
//! order, which is fine for the handful of buses a board has.

use core::fmt;

use heapless::Vec;
use softwire_hal::BusPins;

use crate::engine::BusHandle;

/// Why a handle could not be registered; the handle is handed back
pub enum RegistryError<P> {
    /// The handle's config carries no name
    Unnamed(BusHandle<P>),
    /// Another registered bus already uses the name
    DuplicateName(BusHandle<P>),
    /// All slots are taken
    Full(BusHandle<P>),
}

impl<P> RegistryError<P> {
    /// Recover the rejected handle
    pub fn into_handle(self) -> BusHandle<P> {
        match self {
            RegistryError::Unnamed(handle)
            | RegistryError::DuplicateName(handle)
            | RegistryError::Full(handle) => handle,
        }
    }
}

impl<P> fmt::Debug for RegistryError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Unnamed(_) => f.write_str("Unnamed"),
            RegistryError::DuplicateName(handle) => f
                .debug_tuple("DuplicateName")
                .field(&handle.config().name())
                .finish(),
            RegistryError::Full(handle) => {
                f.debug_tuple("Full").field(&handle.config().name()).finish()
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<P> defmt::Format for RegistryError<P> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            RegistryError::Unnamed(_) => defmt::write!(f, "Unnamed"),
            RegistryError::DuplicateName(handle) => {
                defmt::write!(f, "DuplicateName({:?})", handle.config().name())
            }
            RegistryError::Full(handle) => {
                defmt::write!(f, "Full({:?})", handle.config().name())
            }
        }
    }
}

/// Fixed-capacity set of named buses
pub struct Registry<P, const N: usize> {
    buses: Vec<BusHandle<P>, N>,
}

impl<P: BusPins, const N: usize> Default for Registry<P, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: BusPins, const N: usize> Registry<P, N> {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self { buses: Vec::new() }
    }

    /// Idle the bus and add it under its configured name
    ///
    /// The bus is initialized even when registration fails.
    pub fn register(&mut self, mut handle: BusHandle<P>) -> Result<(), RegistryError<P>> {
        handle.init();

        let duplicate = match handle.name() {
            None => return Err(RegistryError::Unnamed(handle)),
            Some(name) => self.contains(name),
        };
        if duplicate {
            return Err(RegistryError::DuplicateName(handle));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("registering bus {:?}", handle.name());
        self.buses.push(handle).map_err(RegistryError::Full)
    }

    /// Look a bus up by name
    pub fn find(&mut self, name: &str) -> Option<&mut BusHandle<P>> {
        self.buses.iter_mut().find(|bus| bus.name() == Some(name))
    }

    /// Look a bus up by name without borrowing it mutably
    pub fn get(&self, name: &str) -> Option<&BusHandle<P>> {
        self.buses.iter().find(|bus| bus.name() == Some(name))
    }

    /// Whether a bus with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.buses.iter().filter_map(|bus| bus.name())
    }

    /// Number of registered buses
    pub fn len(&self) -> usize {
        self.buses.len()
    }

    /// Whether no bus is registered
    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }

    /// Remove a bus, keeping the order of the others
    pub fn release(&mut self, name: &str) -> Option<BusHandle<P>> {
        let index = self.buses.iter().position(|bus| bus.name() == Some(name))?;
        Some(self.buses.remove(index))
    }

    /// Tear the registry down, returning every handle in registration order
    pub fn into_handles(self) -> Vec<BusHandle<P>, N> {
        self.buses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BusConfig;
    use crate::sim::SimBus;

    fn named(name: &str) -> BusHandle<SimBus> {
        BusHandle::new(SimBus::new(), BusConfig::default().with_name(name).unwrap())
    }

    #[test]
    fn test_register_and_find() {
        let mut registry: Registry<SimBus, 4> = Registry::new();
        registry.register(named("i2c0")).unwrap();
        registry.register(named("i2c1")).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.find("i2c1").is_some());
        assert!(registry.find("i2c2").is_none());

        let names: std::vec::Vec<&str> = registry.names().collect();
        assert_eq!(names, ["i2c0", "i2c1"]);
    }

    #[test]
    fn test_register_idles_bus() {
        let mut sim = SimBus::new();
        sim.set_scl(false);
        sim.set_sda(false);
        let handle = BusHandle::new(sim, BusConfig::default().with_name("i2c0").unwrap());

        let mut registry: Registry<SimBus, 1> = Registry::new();
        registry.register(handle).unwrap();

        let bus = registry.find("i2c0").unwrap();
        assert!(bus.pins_mut().is_idle());
    }

    #[test]
    fn test_rejects_unnamed_duplicate_and_overflow() {
        let mut registry: Registry<SimBus, 2> = Registry::new();

        let unnamed = BusHandle::new(SimBus::new(), BusConfig::default());
        assert!(matches!(registry.register(unnamed), Err(RegistryError::Unnamed(_))));

        registry.register(named("a")).unwrap();
        assert!(matches!(
            registry.register(named("a")),
            Err(RegistryError::DuplicateName(_))
        ));

        registry.register(named("b")).unwrap();
        let err = registry.register(named("c")).unwrap_err();
        assert_eq!(err.into_handle().name(), Some("c"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_release_keeps_order() {
        let mut registry: Registry<SimBus, 4> = Registry::new();
        registry.register(named("a")).unwrap();
        registry.register(named("b")).unwrap();
        registry.register(named("c")).unwrap();

        let released = registry.release("b").unwrap();
        assert_eq!(released.name(), Some("b"));
        assert!(registry.release("b").is_none());

        let handles = registry.into_handles();
        let names: std::vec::Vec<_> = handles.iter().filter_map(|h| h.name()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn test_found_bus_is_usable() {
        let mut registry: Registry<SimBus, 1> = Registry::new();
        registry.register(named("eeprom")).unwrap();

        let bus = registry.find("eeprom").unwrap();
        assert_eq!(bus.write_register8(0x50, 0x00, &[0x01]), Ok(()));
        assert_eq!(bus.pins_mut().written(), [0xA0, 0x00, 0x01]);
    }
}
