use crate::models::{Package, Service, ServiceCategory, TargetAudience};

const SERVICES: &[Service] = &[
    Service {
        id: "1",
        name: "Men's Haircut",
        category: ServiceCategory::Hair,
        description: "Professional styling for all hair types",
        price: 299,
        duration_minutes: 30,
    },
    Service {
        id: "2",
        name: "Women's Haircut",
        category: ServiceCategory::Hair,
        description: "Expert cutting and styling",
        price: 499,
        duration_minutes: 45,
    },
    Service {
        id: "3",
        name: "Hair Spa",
        category: ServiceCategory::Hair,
        description: "Deep nourishment and relaxation",
        price: 599,
        duration_minutes: 60,
    },
    Service {
        id: "4",
        name: "Keratin Treatment",
        category: ServiceCategory::Hair,
        description: "Silky smooth, manageable hair",
        price: 2999,
        duration_minutes: 120,
    },
    Service {
        id: "5",
        name: "Hair Coloring",
        category: ServiceCategory::Hair,
        description: "Transform your look with vibrant colors",
        price: 1499,
        duration_minutes: 90,
    },
    Service {
        id: "6",
        name: "Highlights",
        category: ServiceCategory::Hair,
        description: "Add dimension with highlights",
        price: 1999,
        duration_minutes: 120,
    },
    Service {
        id: "7",
        name: "Facial",
        category: ServiceCategory::Beauty,
        description: "Glowing, refreshed skin",
        price: 799,
        duration_minutes: 60,
    },
    Service {
        id: "8",
        name: "Cleanup",
        category: ServiceCategory::Beauty,
        description: "Quick refresh for your skin",
        price: 499,
        duration_minutes: 30,
    },
    Service {
        id: "9",
        name: "De-tan Treatment",
        category: ServiceCategory::Beauty,
        description: "Remove tan and brighten skin",
        price: 499,
        duration_minutes: 30,
    },
    Service {
        id: "10",
        name: "Party Makeup",
        category: ServiceCategory::Beauty,
        description: "Look stunning for special occasions",
        price: 1999,
        duration_minutes: 60,
    },
    Service {
        id: "11",
        name: "Bridal Makeup",
        category: ServiceCategory::Beauty,
        description: "Complete bridal makeover",
        price: 3499,
        duration_minutes: 120,
    },
    Service {
        id: "12",
        name: "Nail Art",
        category: ServiceCategory::Beauty,
        description: "Beautiful, creative nail designs",
        price: 699,
        duration_minutes: 45,
    },
    Service {
        id: "13",
        name: "Beard Styling",
        category: ServiceCategory::Grooming,
        description: "Sharp, well-maintained beard",
        price: 199,
        duration_minutes: 20,
    },
    Service {
        id: "14",
        name: "Head Massage",
        category: ServiceCategory::Grooming,
        description: "Stress relief and relaxation",
        price: 299,
        duration_minutes: 30,
    },
    Service {
        id: "15",
        name: "Full Body Massage",
        category: ServiceCategory::Grooming,
        description: "Complete body relaxation",
        price: 1999,
        duration_minutes: 90,
    },
    Service {
        id: "16",
        name: "Manicure",
        category: ServiceCategory::Grooming,
        description: "Hand care and nail grooming",
        price: 399,
        duration_minutes: 30,
    },
    Service {
        id: "17",
        name: "Pedicure",
        category: ServiceCategory::Grooming,
        description: "Foot care and relaxation",
        price: 499,
        duration_minutes: 45,
    },
    Service {
        id: "18",
        name: "Waxing (Full Body)",
        category: ServiceCategory::Grooming,
        description: "Smooth, hair-free skin",
        price: 1299,
        duration_minutes: 60,
    },
];

const PACKAGES: &[Package] = &[
    Package {
        id: "pkg2",
        name: "Bride Package",
        description: "Comprehensive bridal package with makeup, hairdo, facial, manicure, and pedicure",
        price: 14999,
        services: &["2", "11", "7", "12", "16", "17"],
        target_audience: TargetAudience::Bride,
    },
    Package {
        id: "pkg1",
        name: "Groom Package",
        description: "Complete grooming package for grooms including haircut, facial, massage, and beard styling",
        price: 9999,
        services: &["1", "7", "13", "14"],
        target_audience: TargetAudience::Groom,
    },
    Package {
        id: "pkg3",
        name: "Monthly Care Package",
        description: "Regular monthly package with haircut, facial, and massage services",
        price: 9999,
        services: &["1", "7", "14", "3"],
        target_audience: TargetAudience::Regular,
    },
];

/// Read-only view over the salon's price list.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    services: &'static [Service],
    packages: &'static [Package],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            services: SERVICES,
            packages: PACKAGES,
        }
    }

    /// All services, grouped by category.
    pub fn services(&self) -> &'static [Service] {
        self.services
    }

    /// All packages, most expensive first.
    pub fn packages(&self) -> &'static [Package] {
        self.packages
    }

    pub fn services_in(&self, category: ServiceCategory) -> Vec<&'static Service> {
        self.services
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    pub fn service(&self, id: &str) -> Option<&'static Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Looks a package up by id, falling back to its target audience so
    /// that `"groom"` resolves the same as `"pkg1"`.
    pub fn package(&self, key: &str) -> Option<&'static Package> {
        let key = key.trim();
        self.packages.iter().find(|p| p.id == key).or_else(|| {
            self.packages
                .iter()
                .find(|p| p.target_audience.as_str().eq_ignore_ascii_case(key))
        })
    }

    /// The services bundled in a package, in the package's order.
    pub fn package_services(&self, package: &Package) -> Vec<&'static Service> {
        package
            .services
            .iter()
            .filter_map(|id| self.service(id))
            .collect()
    }
}
