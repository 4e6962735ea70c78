use serde::Serialize;
use std::collections::BTreeMap;

use crate::analysis::period::Period;
use crate::analysis::stats::StatsHelper;
use crate::prelude::CostWindow;
use crate::processing::VehicleFamily;
use crate::record::{CumulativeLaunches, LaunchRecord, MissionStatus};

/// Launch count for one `status / country / company` path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyCount {
    pub status: MissionStatus,
    pub country: String,
    pub company: String,
    pub launches: usize,
}

/// A priced launch for the per-company cost scatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostPoint {
    pub year: i32,
    pub company: String,
    pub status: MissionStatus,
    pub cost: f64,
}

/// Enriched launch records, frozen after derivation. Every view is a pure
/// function of the records and is recomputed on each call.
#[derive(Debug, Clone, Default)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
}

impl LaunchDataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Share of `status` within each group. Groups without a single launch
    /// of that status are omitted.
    fn status_share_by<K, F>(&self, status: MissionStatus, key: F) -> BTreeMap<K, f64>
    where
        K: Ord,
        F: Fn(&LaunchRecord) -> K,
    {
        let totals = StatsHelper::tally(self.records.iter().map(&key));
        let hits = StatsHelper::tally(
            self.records
                .iter()
                .filter(|record| record.mission_status == status)
                .map(&key),
        );
        hits.into_iter()
            .map(|(group, count)| {
                let whole = totals.get(&group).copied().unwrap_or(0);
                (group, StatsHelper::percent(count, whole))
            })
            .collect()
    }

    /// Overall share of each mission status.
    pub fn status_distribution(&self) -> BTreeMap<MissionStatus, f64> {
        StatsHelper::tally(self.records.iter().map(|record| record.mission_status))
            .into_iter()
            .map(|(status, count)| (status, StatsHelper::percent(count, self.len())))
            .collect()
    }

    /// Success share for every country in the dataset, `0.0` when a country
    /// never succeeded.
    pub fn success_rate_by_country(&self) -> BTreeMap<String, f64> {
        let successes = self.status_share_by(MissionStatus::Success, |r| r.country.clone());
        StatsHelper::tally(self.records.iter().map(|r| r.country.clone()))
            .into_keys()
            .map(|country| {
                let share = successes.get(&country).copied().unwrap_or(0.0);
                (country, share)
            })
            .collect()
    }

    /// Distribution over the statuses that occur in each country.
    pub fn status_share_by_country(&self) -> BTreeMap<String, BTreeMap<MissionStatus, f64>> {
        let mut counts: BTreeMap<String, BTreeMap<MissionStatus, usize>> = BTreeMap::new();
        for record in &self.records {
            *counts
                .entry(record.country.clone())
                .or_default()
                .entry(record.mission_status)
                .or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(country, by_status)| {
                let total: usize = by_status.values().sum();
                let shares = by_status
                    .into_iter()
                    .map(|(status, count)| (status, StatsHelper::percent(count, total)))
                    .collect();
                (country, shares)
            })
            .collect()
    }

    pub fn success_rate_by_company(&self) -> BTreeMap<String, f64> {
        self.status_share_by(MissionStatus::Success, |r| r.company_name.clone())
    }

    pub fn failure_rate_by_company(&self) -> BTreeMap<String, f64> {
        self.status_share_by(MissionStatus::Failure, |r| r.company_name.clone())
    }

    /// Failure share per period value. Values without a failure are absent;
    /// use [`crate::analysis::reindex`] with [`Period::domain`] for full
    /// coverage.
    pub fn failure_rate_by_period(&self, period: Period) -> BTreeMap<i32, f64> {
        self.status_share_by(MissionStatus::Failure, |r| period.key(r))
    }

    /// Mean cost per year over priced launches only.
    pub fn mean_cost_by_year(&self) -> BTreeMap<i32, f64> {
        let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
        for record in self.records.iter().filter(|r| r.cost > 0.0) {
            by_year.entry(record.year).or_default().push(record.cost);
        }
        by_year
            .into_iter()
            .filter_map(|(year, costs)| StatsHelper::mean(costs).map(|mean| (year, mean)))
            .collect()
    }

    /// Frequency of every family tag, most common first. A record with two
    /// segments of the same family counts twice.
    pub fn vehicle_family_counts(&self) -> Vec<(VehicleFamily, usize)> {
        let mut counts: Vec<(VehicleFamily, usize)> = StatsHelper::tally(
            self.records
                .iter()
                .flat_map(|r| r.vehicle_families.iter().copied()),
        )
        .into_iter()
        .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        counts
    }

    pub fn status_hierarchy(&self) -> Vec<HierarchyCount> {
        StatsHelper::tally(self.records.iter().map(|r| {
            (
                r.mission_status,
                r.country.clone(),
                r.company_name.clone(),
            )
        }))
        .into_iter()
        .map(|((status, country, company), launches)| HierarchyCount {
            status,
            country,
            company,
            launches,
        })
        .collect()
    }

    pub fn cost_points(&self, window: &CostWindow) -> Vec<CostPoint> {
        self.records
            .iter()
            .filter(|r| window.contains(r.cost))
            .map(|r| CostPoint {
                year: r.year,
                company: r.company_name.clone(),
                status: r.mission_status,
                cost: r.cost,
            })
            .collect()
    }

    /// Running launch count per country, one row per year in which the
    /// country launched, ordered by year then country.
    pub fn cumulative_launches(&self) -> Vec<CumulativeLaunches> {
        let per_year = StatsHelper::tally(self.records.iter().map(|r| (r.country.clone(), r.year)));
        let mut running: BTreeMap<String, u64> = BTreeMap::new();
        let mut rows: Vec<CumulativeLaunches> = per_year
            .into_iter()
            .map(|((country, year), launches)| {
                let total = running.entry(country.clone()).or_insert(0);
                *total += launches as u64;
                CumulativeLaunches {
                    country,
                    year,
                    cumulative_launches: *total,
                }
            })
            .collect();
        rows.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.country.cmp(&b.country)));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::period::reindex;
    use crate::ingest::read_launches;
    use crate::processing::Enricher;

    const FIXTURE: &str = "\
Unnamed: 0,Unnamed: 0.1,Company Name,Location,Datum,Detail,Status Rocket, Rocket,Status Mission
0,0,SpaceX,\"LC-39A, Kennedy Space Center, Florida, USA\",\"Fri Aug 07, 2020 05:12 UTC\",Falcon 9 Block 5 | Starlink V1 L9 & BlackSky,StatusActive,\"50.0 \",Success
1,1,CASC,\"Site 9401 (SLS-2), Jiuquan Satellite Launch Center, China\",\"Thu Aug 06, 2020 04:01 UTC\",Long March 2D | Gaofen-9 04 & Q-SAT,StatusActive,\"29.75 \",Success
2,2,SpaceX,\"Pad A, Boca Chica, Texas, USA\",\"Tue Aug 04, 2020 23:57 UTC\",Starship Prototype | 150 Meter Hop,StatusActive,,Failure
3,3,RVSN USSR,\"Site 1/5, Baikonur Cosmodrome, Kazakhstan\",\"Fri Oct 04, 1957 19:28 UTC\",Sputnik 8K71PS | Sputnik-1,StatusRetired,,Success
4,4,ASI,\"San Marco Launch Platform, Mombasa, Kenya\",\"Sat Dec 19, 1964\",Scout X-4 | San Marco 1,StatusRetired,,Success
5,5,AEB,\"VLS Pad, Alcantara Launch Center, Maranhao, Brazil\",\"Tue Jan 01, 2019 12:00 UTC\",VLS-1 | SATEC,StatusRetired,,Failure
6,6,US Air Force,\"SLC-4E, Vandenberg AFB, California, USA\",\"Sun Dec 02, 1990 03:30 UTC\",Titan IV(403)A | Lacrosse 2,StatusRetired,\"1,160.0 \",Partial Failure
7,7,Khrunichev,\"Site 43/4, Plesetsk Cosmodrome, Russia\",\"Tue May 15, 1990 09:00 UTC\",Cosmos-3M (11K65M) | Cosmos 2083,StatusRetired,,Success
";

    fn fixture() -> LaunchDataset {
        let rows = read_launches(FIXTURE.as_bytes()).unwrap();
        Enricher::new().enrich_all(rows).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn country_success_covers_every_country() {
        let rates = fixture().success_rate_by_country();
        assert_eq!(rates.len(), 6);
        assert!(approx(rates["USA"], 100.0 / 3.0));
        assert_eq!(rates["Russian Federation"], 100.0);
        assert_eq!(rates["Brazil"], 0.0);
        assert!(rates.values().all(|v| (0.0..=100.0).contains(v)));
    }

    #[test]
    fn status_shares_sum_to_hundred_per_country() {
        let shares = fixture().status_share_by_country();
        for by_status in shares.values() {
            let total: f64 = by_status.values().sum();
            assert!(approx(total, 100.0));
        }
        let usa = &shares["USA"];
        assert_eq!(usa.len(), 3);
        assert!(approx(usa[&MissionStatus::PartialFailure], 100.0 / 3.0));
    }

    #[test]
    fn company_views_omit_companies_without_the_status() {
        let dataset = fixture();
        let success = dataset.success_rate_by_company();
        let failure = dataset.failure_rate_by_company();

        assert_eq!(success["SpaceX"], 50.0);
        assert_eq!(failure["SpaceX"], 50.0);
        assert!(!success.contains_key("AEB"));
        assert_eq!(failure["AEB"], 100.0);
        assert!(!success.contains_key("US Air Force"));
        assert!(!failure.contains_key("US Air Force"));
    }

    #[test]
    fn failure_free_country_is_absent_from_period_failures() {
        let dataset = fixture();
        let by_year = dataset.failure_rate_by_period(Period::Year);
        assert_eq!(by_year.len(), 2);
        assert!(approx(by_year[&2020], 100.0 / 3.0));
        assert_eq!(by_year[&2019], 100.0);
        // Kenya never failed: its only launch year and weekday are absent here
        // but it still has a success share.
        assert!(!by_year.contains_key(&1964));
        assert!(!dataset
            .failure_rate_by_period(Period::Weekday)
            .contains_key(&5));
        assert_eq!(dataset.success_rate_by_country()["Kenya"], 100.0);
    }

    #[test]
    fn period_views_group_by_month_and_weekday() {
        let dataset = fixture();
        let by_month = dataset.failure_rate_by_period(Period::Month);
        assert!(approx(by_month[&8], 100.0 / 3.0));
        assert_eq!(by_month[&1], 100.0);

        let by_weekday = dataset.failure_rate_by_period(Period::Weekday);
        assert_eq!(by_weekday.len(), 1);
        assert!(approx(by_weekday[&1], 200.0 / 3.0));
    }

    #[test]
    fn year_reindex_spans_full_range() {
        let dataset = fixture();
        let domain = Period::Year.domain(dataset.records());
        let full = reindex(&dataset.failure_rate_by_period(Period::Year), &domain);
        assert_eq!(full.len(), 2020 - 1957 + 1);
        assert_eq!(full[&1964], 0.0);
        assert_eq!(full[&2019], 100.0);
    }

    #[test]
    fn mean_cost_skips_unpriced_launches() {
        let costs = fixture().mean_cost_by_year();
        assert_eq!(costs.len(), 2);
        assert!(approx(costs[&2020], 39.875));
        assert_eq!(costs[&1990], 1160.0);
    }

    #[test]
    fn vehicle_counts_are_ordered_by_frequency() {
        let counts = fixture().vehicle_family_counts();
        assert_eq!(
            counts,
            vec![
                (VehicleFamily::Other, 11),
                (VehicleFamily::Cosmos, 2),
                (VehicleFamily::Falcon, 1),
                (VehicleFamily::LongMarch, 1),
                (VehicleFamily::Titan, 1),
            ]
        );
    }

    #[test]
    fn status_distribution_matches_counts() {
        let distribution = fixture().status_distribution();
        assert_eq!(distribution[&MissionStatus::Success], 62.5);
        assert_eq!(distribution[&MissionStatus::Failure], 25.0);
        assert_eq!(distribution[&MissionStatus::PartialFailure], 12.5);
        assert!(!distribution.contains_key(&MissionStatus::PrelaunchFailure));
    }

    #[test]
    fn hierarchy_has_one_entry_per_path() {
        let hierarchy = fixture().status_hierarchy();
        assert_eq!(hierarchy.len(), 8);
        assert_eq!(
            hierarchy[0],
            HierarchyCount {
                status: MissionStatus::Success,
                country: "China".into(),
                company: "CASC".into(),
                launches: 1,
            }
        );
        assert_eq!(hierarchy.iter().map(|h| h.launches).sum::<usize>(), 8);
    }

    #[test]
    fn cost_points_respect_window() {
        let dataset = fixture();
        let points = dataset.cost_points(&CostWindow::default());
        assert_eq!(points.len(), 3);
        let narrow = dataset.cost_points(&CostWindow {
            min: 40.0,
            max: 100.0,
        });
        assert_eq!(narrow.len(), 1);
        assert_eq!(narrow[0].company, "SpaceX");
    }

    #[test]
    fn cumulative_launches_run_per_country() {
        let rows = fixture().cumulative_launches();
        let usa: Vec<(i32, u64)> = rows
            .iter()
            .filter(|row| row.country == "USA")
            .map(|row| (row.year, row.cumulative_launches))
            .collect();
        assert_eq!(usa, vec![(1990, 1), (2020, 3)]);
        assert_eq!(rows[0].country, "Kazakhstan");
        assert_eq!(rows[0].year, 1957);
    }

    #[test]
    fn views_leave_records_untouched() {
        let dataset = fixture();
        let before = dataset.records().to_vec();
        let _ = dataset.success_rate_by_country();
        let _ = dataset.mean_cost_by_year();
        let _ = dataset.cumulative_launches();
        assert_eq!(dataset.records(), before.as_slice());
    }
}
