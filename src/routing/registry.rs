//! Route registry: which page component serves each (master, module) pair.
//!
//! # Responsibilities
//! - Store the page components registered for every admin screen
//! - Pick the component for a navigation mode
//! - List registered sections for sidebar generation
//!
//! # Design Decisions
//! - Immutable after construction, shared as `&'static` via `global()`
//! - An entry is either one unconditional component or a CRUD set
//! - Missing slots are `None`; the router turns them into a redirect

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use crate::routing::path::Mode;
use crate::routing::vocabulary::Segment;

static GLOBAL: OnceLock<RouteRegistry> = OnceLock::new();

/// Reference to a page component, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Component(&'static str);

impl Component {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Components registered for one (master, module) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEntry {
    /// Served regardless of mode.
    Single(Component),
    /// List / create / edit screens. `edit_form` falls back to `form`.
    Crud {
        list: Option<Component>,
        form: Option<Component>,
        edit_form: Option<Component>,
    },
}

impl RouteEntry {
    /// Component for `mode`, or `None` if the entry has no such slot.
    pub fn select(&self, mode: Mode) -> Option<Component> {
        match *self {
            RouteEntry::Single(component) => Some(component),
            RouteEntry::Crud { list, form, edit_form } => match mode {
                Mode::Edit => edit_form.or(form),
                Mode::New => form,
                Mode::View => list,
            },
        }
    }
}

/// A sidebar group: one master and its modules, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub master: Segment,
    pub modules: Vec<Segment>,
}

/// Immutable map from (master, module) to the components serving it.
#[derive(Debug)]
pub struct RouteRegistry {
    entries: HashMap<(Segment, Segment), RouteEntry>,
    sections: Vec<Section>,
}

impl RouteRegistry {
    /// The back-office registry. Built on first access.
    pub fn global() -> &'static RouteRegistry {
        GLOBAL.get_or_init(back_office)
    }

    pub fn builder() -> RouteRegistryBuilder {
        RouteRegistryBuilder::default()
    }

    pub fn get(&self, master: Segment, module: Segment) -> Option<&RouteEntry> {
        self.entries.get(&(master, module))
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects entries for a [`RouteRegistry`].
#[derive(Debug, Default)]
pub struct RouteRegistryBuilder {
    entries: HashMap<(Segment, Segment), RouteEntry>,
    order: Vec<(Segment, Segment)>,
}

impl RouteRegistryBuilder {
    /// Register an entry. Registering a pair twice replaces the earlier entry.
    pub fn route(mut self, master: Segment, module: Segment, entry: RouteEntry) -> Self {
        if self.entries.insert((master, module), entry).is_some() {
            tracing::warn!(%master, %module, "Route registered twice; keeping the latest entry");
        } else {
            self.order.push((master, module));
        }
        self
    }

    pub fn single(self, master: Segment, module: Segment, component: &'static str) -> Self {
        self.route(master, module, RouteEntry::Single(Component::new(component)))
    }

    /// List and create form; edits reuse the create form.
    pub fn crud(
        self,
        master: Segment,
        module: Segment,
        list: &'static str,
        form: &'static str,
    ) -> Self {
        self.route(
            master,
            module,
            RouteEntry::Crud {
                list: Some(Component::new(list)),
                form: Some(Component::new(form)),
                edit_form: None,
            },
        )
    }

    /// List, create form and a dedicated edit form.
    pub fn crud_with_edit(
        self,
        master: Segment,
        module: Segment,
        list: &'static str,
        form: &'static str,
        edit_form: &'static str,
    ) -> Self {
        self.route(
            master,
            module,
            RouteEntry::Crud {
                list: Some(Component::new(list)),
                form: Some(Component::new(form)),
                edit_form: Some(Component::new(edit_form)),
            },
        )
    }

    /// Read-only screen with no forms.
    pub fn list_only(self, master: Segment, module: Segment, list: &'static str) -> Self {
        self.route(
            master,
            module,
            RouteEntry::Crud {
                list: Some(Component::new(list)),
                form: None,
                edit_form: None,
            },
        )
    }

    pub fn build(self) -> RouteRegistry {
        let mut sections: Vec<Section> = Vec::new();
        for (master, module) in self.order {
            match sections.iter_mut().find(|s| s.master == master) {
                Some(section) => section.modules.push(module),
                None => sections.push(Section {
                    master,
                    modules: vec![module],
                }),
            }
        }

        RouteRegistry {
            entries: self.entries,
            sections,
        }
    }
}

fn back_office() -> RouteRegistry {
    use Segment::*;

    let registry = RouteRegistry::builder()
        // Location masters
        .crud(Masters, Continents, "ContinentList", "ContinentForm")
        .crud(Masters, Countries, "CountryList", "CountryForm")
        .crud(Masters, States, "StateList", "StateForm")
        .crud(Masters, Districts, "DistrictList", "DistrictForm")
        .crud(Masters, Cities, "CityList", "CityForm")
        .crud(Masters, Zones, "ZoneList", "ZoneForm")
        .crud(Masters, Wards, "WardList", "WardForm")
        .crud_with_edit(Masters, Properties, "PropertyList", "PropertyForm", "PropertyEditForm")
        // Staff
        .crud_with_edit(Admins, Admins, "AdminList", "AdminForm", "AdminEditForm")
        .crud_with_edit(Admins, Staff, "StaffList", "StaffForm", "StaffEditForm")
        .crud(Admins, Roles, "RoleList", "RoleForm")
        .crud(Admins, Designations, "DesignationList", "DesignationForm")
        // Fleet
        .crud_with_edit(TransportMaster, Vehicles, "VehicleList", "VehicleForm", "VehicleEditForm")
        .crud(TransportMaster, VehicleTypes, "VehicleTypeList", "VehicleTypeForm")
        .crud(TransportMaster, Drivers, "DriverList", "DriverForm")
        .crud(TransportMaster, Fuel, "FuelList", "FuelForm")
        .single(VehicleTracking, VehicleTrack, "VehicleTrack")
        .single(VehicleTracking, DistanceReport, "VehicleDistanceReport")
        // Operations
        .crud(TripPlanning, Routes, "RouteList", "RouteForm")
        .crud_with_edit(TripPlanning, Trips, "TripList", "TripForm", "TripEditForm")
        .crud_with_edit(Grievance, Complaint, "ComplaintList", "ComplaintForm", "ComplaintEditForm")
        .list_only(Grievance, ComplaintTypes, "ComplaintTypeList")
        // Dashboards
        .single(Dashboards, BinMonitoring, "BinMonitoringMap")
        .single(Dashboards, Weighbridge, "WeighbridgeReport")
        .single(Dashboards, Reports, "ReportsAnalytics")
        .build();

    tracing::debug!(routes = registry.len(), "Route registry built");
    registry
}
