// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use teltarif_lcr::domain::tariff::{DestinationOffer, DestinationTariffs, TariffSnapshot};

// ==========================================
// DestinationOffer 构建器
// ==========================================

pub struct OfferBuilder {
    rank: u32,
    provider: String,
    product: Option<String>,
    prefix: String,
    price: String,
    pulse: Option<String>,
}

impl OfferBuilder {
    pub fn new(rank: u32, provider: &str) -> Self {
        Self {
            rank,
            provider: provider.to_string(),
            product: None,
            prefix: "01042".to_string(),
            price: "1,00 ct/Min".to_string(),
            pulse: Some("60/60".to_string()),
        }
    }

    pub fn product(mut self, product: &str) -> Self {
        self.product = Some(product.to_string());
        self
    }

    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn price(mut self, price: &str) -> Self {
        self.price = price.to_string();
        self
    }

    pub fn pulse(mut self, pulse: &str) -> Self {
        self.pulse = Some(pulse.to_string());
        self
    }

    pub fn without_pulse(mut self) -> Self {
        self.pulse = None;
        self
    }

    pub fn build(self) -> DestinationOffer {
        DestinationOffer {
            rank: self.rank,
            provider: self.provider,
            product: self.product,
            prefix: self.prefix,
            price: self.price,
            pulse: self.pulse,
            provider_url: None,
            product_url: None,
        }
    }
}

// ==========================================
// DestinationTariffs 构建器
// ==========================================

pub struct TariffsBuilder {
    tariffs: DestinationTariffs,
}

impl TariffsBuilder {
    pub fn new() -> Self {
        Self {
            tariffs: DestinationTariffs::default(),
        }
    }

    pub fn prefix(mut self, prefix: &str) -> Self {
        self.tariffs.prefixes.push(prefix.to_string());
        self
    }

    pub fn note(mut self, note: &str) -> Self {
        self.tariffs.notes.push(note.to_string());
        self
    }

    pub fn slot(mut self, label: &str, offers: Vec<DestinationOffer>) -> Self {
        self.tariffs.providers.insert(label.to_string(), offers);
        self
    }

    pub fn build(self) -> DestinationTariffs {
        self.tariffs
    }
}

/// 由 (目的地, 资费表) 列表创建快照
pub fn snapshot_of(entries: Vec<(&str, DestinationTariffs)>) -> TariffSnapshot {
    let mut snapshot = TariffSnapshot::new();
    for (dest, tariffs) in entries {
        snapshot.insert(dest, tariffs);
    }
    snapshot
}

/// Scenario A: Usa 全天单一排名 1 资费
pub fn usa_all_day_tariffs() -> DestinationTariffs {
    TariffsBuilder::new()
        .prefix("01042")
        .slot(
            "Mo-So ganztags",
            vec![OfferBuilder::new(1, "ProviderA")
                .prefix("01042")
                .price("0,01 EUR/Min")
                .pulse("60/60")
                .build()],
        )
        .build()
}

/// 工作日白天时段 + 多个备选
pub fn usa_weekday_tariffs() -> DestinationTariffs {
    TariffsBuilder::new()
        .prefix("01042")
        .slot(
            "Mo-Fr 08-18 Uhr",
            vec![
                OfferBuilder::new(1, "ProviderA").price("0,50 ct/Min").build(),
                OfferBuilder::new(2, "ProviderB").prefix("01013").price("0,90 ct/Min").pulse("1/1").build(),
            ],
        )
        .build()
}
