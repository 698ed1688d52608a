use chrono::{DateTime, Local};

use crate::model::WeatherResponse;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a weather response as a human-readable report.
///
/// The live block is rendered when the response status marks success and a
/// live reading is present; the forecast block is rendered whenever forecast
/// entries are present, one sub-block per daily cast in input order. Both
/// blocks can appear together; a response with neither yields an empty
/// string. `queried_at` is taken as a parameter so output is deterministic.
pub fn render(data: &WeatherResponse, queried_at: DateTime<Local>) -> String {
    let stamp = queried_at.format(TIME_FORMAT);
    let mut out = String::new();

    if data.is_ok() {
        if let Some(live) = data.lives.as_ref().and_then(|lives| lives.first()) {
            out.push_str(&format!("实况天气-查询时间: {stamp}\n"));
            out.push_str(&format!("城市: {} - {}\n", live.province, live.city));
            out.push_str(&format!("报告时间: {}\n", live.reporttime));
            out.push('\n');
            out.push_str(&format!("天气: {}\n", live.weather));
            out.push_str(&format!("温度: {}°C\n", live.temperature));
            out.push_str(&format!("湿度: {}%\n", live.humidity));
            out.push_str(&format!("风向: {}\n", live.winddirection));
            out.push_str(&format!("风力: {}\n", live.windpower));
        }
    }

    if let Some(forecast) = data.forecasts.as_ref().and_then(|forecasts| forecasts.first()) {
        out.push_str(&format!("预报天气-查询时间: {stamp}\n"));
        out.push_str(&format!("城市: {}-{}\n", forecast.province, forecast.city));
        out.push_str(&format!("报告时间: {}\n", forecast.reporttime));
        out.push('\n');
        for cast in &forecast.casts {
            out.push_str(&format!("日期: {}\n", cast.date));
            out.push_str(&format!(
                " 白天气温: {}°C, 夜间气温: {}°C\n",
                cast.daytemp, cast.nighttemp
            ));
            out.push_str(&format!(
                " 白天天气: {}, 夜间天气: {}\n",
                cast.dayweather, cast.nightweather
            ));
            out.push_str(&format!(
                " 白天风力: {}, 夜间风力 {}\n",
                cast.daypower, cast.nightpower
            ));
            out.push('\n');
        }
    }

    out
}
