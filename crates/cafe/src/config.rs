/// Amounts the counter puts in when a condiment is picked from the menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CafeConfig {
    pub lemon_quantity: u32,
    pub ice_cube_quantity: u32,
    pub chocolate_crumbs_mass: u32,
    pub coconut_flakes_mass: u32,
    pub chocolate_slices: u32,
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            lemon_quantity: 2,
            ice_cube_quantity: 2,
            chocolate_crumbs_mass: 5,
            coconut_flakes_mass: 5,
            chocolate_slices: 1,
        }
    }
}
