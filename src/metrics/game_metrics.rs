use std::time::{Duration, Instant};

/// Per-session statistics shown next to the board
pub struct GameMetrics {
    last_update: Instant,
    /// Time spent running in the current game; pauses are not counted
    pub play_time: Duration,
    pub best_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            play_time: Duration::ZERO,
            best_score: 0,
            games_played: 0,
        }
    }

    /// Accumulate the time since the previous update if the game was running
    pub fn update(&mut self, running: bool) {
        self.update_at(Instant::now(), running);
    }

    pub fn update_at(&mut self, now: Instant, running: bool) {
        if running {
            self.play_time += now.saturating_duration_since(self.last_update);
        }
        self.last_update = now;
    }

    pub fn on_game_start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.last_update = now;
        self.play_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.play_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.play_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.play_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.play_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.best_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.best_score, 10); // Should not decrease
        assert_eq!(metrics.games_played, 2);
    }

    #[test]
    fn test_paused_time_not_counted() {
        let start = Instant::now();
        let at = |millis| start + Duration::from_millis(millis);
        let mut metrics = GameMetrics::new();
        metrics.start_at(start);

        metrics.update_at(at(50), false);
        assert_eq!(metrics.play_time, Duration::ZERO);

        metrics.update_at(at(120), true);
        assert_eq!(metrics.play_time, Duration::from_millis(70));

        metrics.update_at(at(500), false);
        metrics.update_at(at(530), true);
        assert_eq!(metrics.play_time, Duration::from_millis(100));

        metrics.start_at(at(600));
        assert_eq!(metrics.play_time, Duration::ZERO);
    }
}
