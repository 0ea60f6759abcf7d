use rust_decimal::Decimal;

/// Dollar price for display. Sub-cent prices get 6 decimal places so the
/// smallest assets stay distinguishable; everything else gets 4.
pub fn format_price(price: Decimal) -> String {
    let cent = Decimal::new(1, 2);
    let mut p = price;
    if price < cent {
        p.rescale(6);
    } else {
        p.rescale(4);
    }
    format!("${}", p)
}

/// Abbreviated dollar figure: millions and thousands with one decimal,
/// whole units below that. Used for volume and market cap alike.
pub fn format_volume(volume: Decimal) -> String {
    let million = Decimal::from(1_000_000);
    let thousand = Decimal::from(1_000);

    if volume >= million {
        let mut v = volume / million;
        v.rescale(1);
        format!("${}M", v)
    } else if volume >= thousand {
        let mut v = volume / thousand;
        v.rescale(1);
        format!("${}K", v)
    } else {
        let mut v = volume;
        v.rescale(0);
        format!("${}", v)
    }
}

/// Signed 24h percentage change, two decimals, explicit '+' when gaining.
pub fn format_change(change: Decimal) -> String {
    let mut c = change;
    c.rescale(2);
    if change >= Decimal::ZERO {
        format!("+{}%", c)
    } else {
        format!("{}%", c)
    }
}
