use micro_beverage::condiment::{
    AnyCondiment, ChocolateCrumbs, ChocolateSlices, Cinnamon, CoconutFlakes, Cream, IceCubeKind, IceCubes, Lemon,
    Liqueur, LiqueurKind, Syrup, SyrupKind,
};

#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    depth: usize,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, depth: usize) -> Self {
        Self { name, group, depth }
    }

    pub fn small(name: &'static str, depth: usize) -> Self {
        Self::new(name, TestGroup::Small, depth)
    }

    pub fn normal(name: &'static str, depth: usize) -> Self {
        Self::new(name, TestGroup::Normal, depth)
    }

    pub fn large(name: &'static str, depth: usize) -> Self {
        Self::new(name, TestGroup::Large, depth)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `depth` condiments, cycling through the whole menu
    pub fn condiments(&self) -> Vec<AnyCondiment> {
        menu().into_iter().cycle().take(self.depth).collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}

impl TestGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestGroup::Small => "small",
            TestGroup::Normal => "normal",
            TestGroup::Large => "large",
        }
    }
}

fn menu() -> [AnyCondiment; 9] {
    [
        Lemon::new(2).into(),
        Cinnamon.into(),
        IceCubes::new(2, IceCubeKind::Dry).into(),
        ChocolateCrumbs::new(5).into(),
        CoconutFlakes::new(5).into(),
        Syrup::new(SyrupKind::Maple).into(),
        Cream.into(),
        Liqueur::new(LiqueurKind::Nutty).into(),
        ChocolateSlices::new(1).into(),
    ]
}
