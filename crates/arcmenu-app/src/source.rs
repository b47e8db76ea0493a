use crate::config::{AngleConfig, AppConfig, ItemConfig, ItemLabel};
use crate::events::AppEvent;
use arcmenu::{MenuDataSource, MenuDelegate, Size};
use async_channel::Sender;

/// Serves menu items straight from the loaded config.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    items: Vec<ItemConfig>,
    angles: AngleConfig,
}

impl ConfigSource {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            items: config.items.clone(),
            angles: config.angles,
        }
    }

    pub fn label(&self, index: usize) -> Option<&ItemLabel> {
        self.items.get(index).map(|item| &item.label)
    }
}

impl MenuDataSource for ConfigSource {
    type Item = ItemLabel;

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<ItemLabel> {
        self.label(index).cloned()
    }

    fn item_size(&self, index: usize) -> Option<Size> {
        self.items.get(index).and_then(ItemConfig::size)
    }

    fn speed_ratio(&self) -> Option<f64> {
        self.angles.speed_ratio
    }

    fn start_angle_offset(&self) -> Option<f64> {
        self.angles.start_angle_offset
    }

    fn spacing_angle(&self) -> Option<f64> {
        self.angles.spacing_angle
    }

    fn min_angle(&self) -> Option<f64> {
        self.angles.min_angle
    }

    fn max_angle(&self) -> Option<f64> {
        self.angles.max_angle
    }
}

/// Forwards selections onto the app's event channel.
#[derive(Debug, Clone)]
pub struct ChannelDelegate {
    tx: Sender<AppEvent>,
}

impl ChannelDelegate {
    pub fn new(tx: Sender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl MenuDelegate for ChannelDelegate {
    fn on_item_selected(&self, index: usize) {
        if let Err(e) = self.tx.try_send(AppEvent::ItemSelected(index)) {
            log::error!("Failed to deliver selection of item {}: {}", index, e);
        }
    }
}
