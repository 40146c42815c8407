//! Session orchestration for Run and Endless modes
//!
//! A `Session` owns its current [`Round`], its per-session upgrade budget and its RNG, and
//! borrows the word corpus. Every operation takes the [`Profile`] it books statistics and
//! gold into, and ends with a write-through. The shell reacts to the returned events; the
//! session never sleeps, schedules or renders.

use super::config::SessionConfig;
use super::error::GameError;
use super::hints::{self, Hint};
use super::round::{Round, RoundStatus, WordSlot};
use super::upgrades::{UpgradeKind, UpgradeUses};
use crate::core::{Word, WordLength};
use crate::profile::{Ledger, Profile};
use crate::wordlists::WordCorpus;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fixed number of words, optional boss at the end
    Run,
    /// Words until one is lost for good
    Endless,
}

impl Mode {
    #[must_use]
    pub const fn ledger(self) -> Ledger {
        match self {
            Self::Run => Ledger::Normal,
            Self::Endless => Ledger::Endless,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// A round is accepting guesses and hints
    Playing,
    /// The current word resolved; waiting for `next_word`
    WordOver { won: bool },
    /// Session over, summary delivered
    Finished,
}

/// How one word of the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub target: Word,
    pub boss: bool,
    pub solved: bool,
    pub guesses: u32,
}

/// End-of-session report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub mode: Mode,
    pub words: Vec<WordRecord>,
    pub words_solved: u32,
    /// Words the Run was laid out with; for Endless, words attempted
    pub words_total: usize,
    pub bosses_killed: u32,
    pub gold_earned: u32,
    /// Endless only: the word that ended the session
    pub failed_word: Option<Word>,
    /// Endless only: the session beat the Endless peak
    pub new_best: bool,
}

/// What a round resolution meant for the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Solved,
    Failed,
    /// Endless loss absorbed by an extra life; the same word restarts
    ExtraLifeUsed { lives_left: u32 },
    GameOver(Summary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Continue,
    Resolved(Resolution),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    NextWord,
    Finished(Summary),
}

pub struct Session<'a> {
    mode: Mode,
    config: SessionConfig,
    corpus: &'a WordCorpus,
    rng: StdRng,
    phase: SessionPhase,
    uses: UpgradeUses,
    extra_lives: u32,
    /// Base guesses plus the extra-guess upgrade
    allowance: u32,
    /// Run: the pre-drawn layout. Endless: every word drawn so far.
    slots: Vec<WordSlot>,
    current: usize,
    round: Round,
    records: Vec<WordRecord>,
    words_solved: u32,
    bosses_killed: u32,
    guesses_used: u64,
}

impl<'a> Session<'a> {
    /// Start a session
    ///
    /// Run mode draws its whole layout up front and counts as a run played. Endless mode draws
    /// one word at a time and gets extra lives from the owned Extra Life level.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Store` if the start could not be saved.
    pub fn start(
        mode: Mode,
        config: SessionConfig,
        corpus: &'a WordCorpus,
        profile: &mut Profile,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let levels = *profile.levels();
        let allowance = config.base_guesses() + u32::from(levels.owns(UpgradeKind::ExtraGuess));

        let slots = match mode {
            Mode::Run => {
                let mut slots: Vec<WordSlot> = (0..config.run_words())
                    .map(|_| draw_slot(corpus, &config, false, &mut rng))
                    .collect();
                if config.modifiers.boss {
                    slots.push(draw_slot(corpus, &config, true, &mut rng));
                }
                profile.stats_mut().record(Ledger::Normal, |b| b.runs_played += 1);
                slots
            }
            Mode::Endless => {
                let boss = config.is_endless_boss(1);
                if boss {
                    profile
                        .stats_mut()
                        .record(Ledger::Endless, |b| b.total_bosses_attempted += 1);
                }
                vec![draw_slot(corpus, &config, boss, &mut rng)]
            }
        };

        let extra_lives = match mode {
            Mode::Run => 0,
            Mode::Endless => levels.level(UpgradeKind::ExtraLife),
        };
        let round = Round::new(slots[0].clone(), allowance, config.timer_seconds());

        log::info!(
            "{mode:?} session started: {} words, {allowance} guesses each, {extra_lives} extra lives",
            slots.len()
        );
        profile.persist()?;

        Ok(Self {
            mode,
            config,
            corpus,
            rng,
            phase: SessionPhase::Playing,
            uses: UpgradeUses::from_levels(&levels),
            extra_lives,
            allowance,
            slots,
            current: 0,
            round,
            records: Vec::new(),
            words_solved: 0,
            bosses_killed: 0,
            guesses_used: 0,
        })
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn uses(&self) -> &UpgradeUses {
        &self.uses
    }

    #[must_use]
    pub const fn extra_lives(&self) -> u32 {
        self.extra_lives
    }

    #[must_use]
    pub const fn words_solved(&self) -> u32 {
        self.words_solved
    }

    #[must_use]
    pub const fn bosses_killed(&self) -> u32 {
        self.bosses_killed
    }

    /// 1-based position of the current word
    #[must_use]
    pub const fn word_number(&self) -> usize {
        self.current + 1
    }

    /// Words in a Run; `None` for Endless
    #[must_use]
    pub fn word_count(&self) -> Option<usize> {
        match self.mode {
            Mode::Run => Some(self.slots.len()),
            Mode::Endless => None,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    /// Whether an upgrade can be activated right now
    #[must_use]
    pub fn can_use(&self, kind: UpgradeKind) -> bool {
        self.is_playing() && kind.is_consumable() && self.uses.remaining(kind) > 0
    }

    fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing && self.round.is_active()
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        if !self.is_playing() {
            return Err(GameError::NotPlaying);
        }
        Ok(())
    }

    /// Play a guess in the current round
    ///
    /// # Errors
    ///
    /// `NotPlaying`, `WrongLength` and `NotInWordList` leave everything untouched.
    /// `Store` means the guess was played but not saved.
    pub fn submit_guess(
        &mut self,
        profile: &mut Profile,
        raw: &str,
    ) -> Result<GuessOutcome, GameError> {
        self.ensure_playing()?;
        let outcome = match self.round.submit(raw, self.corpus)? {
            RoundStatus::Active => GuessOutcome::Continue,
            RoundStatus::Won => GuessOutcome::Resolved(self.resolve(profile, true)),
            RoundStatus::Lost => GuessOutcome::Resolved(self.resolve(profile, false)),
        };
        profile.persist()?;
        Ok(outcome)
    }

    /// Advance the round timer by one second
    ///
    /// A no-op outside an active round or with the timer disabled.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Store` if a timeout resolution could not be saved.
    pub fn tick(&mut self, profile: &mut Profile) -> Result<Option<Resolution>, GameError> {
        if !self.is_playing() {
            return Ok(None);
        }
        if self.round.tick().is_none() {
            return Ok(None);
        }
        log::debug!("timer expired on word {}", self.word_number());
        let resolution = self.resolve(profile, false);
        profile.persist()?;
        Ok(Some(resolution))
    }

    /// Activate a Super, Positive, Negative or Bonus Guess upgrade
    ///
    /// # Errors
    ///
    /// - `NotPlaying` outside an active round
    /// - `NotUsable` for kinds that are not activated this way
    /// - `NoUsesLeft` when the session budget for `kind` is spent
    /// - `NoCandidates` when the hint has nothing new to reveal; the use is not consumed
    /// - `Store` if the hint was applied but not saved
    pub fn use_upgrade(&mut self, profile: &mut Profile, kind: UpgradeKind) -> Result<Hint, GameError> {
        self.ensure_playing()?;
        if !matches!(
            kind,
            UpgradeKind::SuperHint
                | UpgradeKind::PositiveHint
                | UpgradeKind::NegativeHint
                | UpgradeKind::BonusGuess
        ) {
            return Err(GameError::NotUsable(kind));
        }
        if self.uses.remaining(kind) == 0 {
            return Err(GameError::NoUsesLeft(kind));
        }

        let target = self.round.target();
        let guesses = self.round.guesses();
        let history = self.round.hints();
        let hint = match kind {
            UpgradeKind::SuperHint => hints::super_hint(target, guesses, history, &mut self.rng),
            UpgradeKind::PositiveHint => {
                hints::positive_hint(target, guesses, history, &mut self.rng)
            }
            UpgradeKind::NegativeHint => hints::negative_hint(target, history, &mut self.rng),
            _ => Some(Hint::BonusGuess),
        }
        .ok_or(GameError::NoCandidates(kind))?;

        self.uses.consume(kind);
        self.round.push_hint(hint);
        profile
            .stats_mut()
            .record(self.mode.ledger(), |b| b.add_hint(kind));
        log::debug!("{kind} used: {hint}");
        profile.persist()?;
        Ok(hint)
    }

    /// Replace the current target with a fresh word of the same kind
    ///
    /// Guesses, bonus guesses and the timer reset; hint history stays. The reroll does not
    /// count as a word attempted.
    ///
    /// # Errors
    ///
    /// `NotPlaying` outside an active round, `NoUsesLeft` without rerolls,
    /// `Store` if the reroll was applied but not saved.
    pub fn reroll(&mut self, profile: &mut Profile) -> Result<(), GameError> {
        self.ensure_playing()?;
        if !self.uses.consume(UpgradeKind::WordReroll) {
            return Err(GameError::NoUsesLeft(UpgradeKind::WordReroll));
        }

        let slot = self.round.slot();
        let length = slot.length();
        let fresh = redraw(self.corpus, &self.config, length, &slot.target, &mut self.rng);
        self.slots[self.current].target = fresh.clone();
        self.round.reroll(fresh);

        profile
            .stats_mut()
            .record(self.mode.ledger(), |b| b.add_hint(UpgradeKind::WordReroll));
        profile.persist()?;
        Ok(())
    }

    /// Move on after a resolved word
    ///
    /// # Errors
    ///
    /// `NotPlaying` unless the current word is over (and, in Endless, was won).
    /// `Store` if the advance was applied but not saved.
    pub fn next_word(&mut self, profile: &mut Profile) -> Result<Advance, GameError> {
        let SessionPhase::WordOver { won } = self.phase else {
            return Err(GameError::NotPlaying);
        };

        let advance = match self.mode {
            Mode::Run if self.current + 1 >= self.slots.len() => {
                Advance::Finished(self.finish_run(profile))
            }
            Mode::Run => {
                self.current += 1;
                self.begin_round();
                Advance::NextWord
            }
            Mode::Endless if !won => return Err(GameError::NotPlaying),
            Mode::Endless => {
                let boss = self.config.is_endless_boss(self.words_solved + 1);
                if boss {
                    profile
                        .stats_mut()
                        .record(Ledger::Endless, |b| b.total_bosses_attempted += 1);
                }
                let slot = draw_slot(self.corpus, &self.config, boss, &mut self.rng);
                self.slots.push(slot);
                self.current = self.slots.len() - 1;
                self.begin_round();
                Advance::NextWord
            }
        };
        profile.persist()?;
        Ok(advance)
    }

    /// Leave the session early
    ///
    /// No gold is paid. Endless still books its words-solved peak.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Store` if the quit could not be saved.
    pub fn quit(self, profile: &mut Profile) -> Result<(), GameError> {
        if self.mode == Mode::Endless && self.phase != SessionPhase::Finished {
            let words = u64::from(self.words_solved);
            profile.stats_mut().record(Ledger::Endless, |b| {
                b.note_endless_words(words);
            });
        }
        profile.player_mut().words_completed = 0;
        log::info!("{:?} session quit after {} words", self.mode, self.words_solved);
        profile.persist()?;
        Ok(())
    }

    fn begin_round(&mut self) {
        self.round = Round::new(
            self.slots[self.current].clone(),
            self.allowance,
            self.config.timer_seconds(),
        );
        self.phase = SessionPhase::Playing;
    }

    fn record_word(&mut self, solved: bool) {
        self.records.push(WordRecord {
            target: self.round.target().clone(),
            boss: self.round.is_boss(),
            solved,
            guesses: self.round.guess_count(),
        });
    }

    fn resolve(&mut self, profile: &mut Profile, won: bool) -> Resolution {
        let boss = self.round.is_boss();
        let guesses = u64::from(self.round.guess_count());
        log::debug!(
            "word {} ({}) {} in {guesses} guesses",
            self.word_number(),
            self.round.target(),
            if won { "solved" } else { "failed" }
        );

        if won {
            self.words_solved += 1;
            profile.player_mut().words_completed += 1;
            if boss {
                self.bosses_killed += 1;
            }
        }

        match self.mode {
            Mode::Run => {
                profile.stats_mut().record(Ledger::Normal, |b| {
                    if won {
                        b.total_words_solved += 1;
                        if boss {
                            b.total_bosses_solved += 1;
                        }
                    }
                    b.total_words_attempted += 1;
                    if boss {
                        b.total_bosses_attempted += 1;
                    }
                    b.total_guesses += guesses;
                });
                self.guesses_used += guesses;
                self.record_word(won);
                self.phase = SessionPhase::WordOver { won };
                if won { Resolution::Solved } else { Resolution::Failed }
            }
            Mode::Endless if won => {
                profile.stats_mut().record(Ledger::Endless, |b| {
                    b.total_guesses += guesses;
                    b.total_words_attempted += 1;
                    b.total_words_solved += 1;
                    if boss {
                        b.total_bosses_solved += 1;
                    }
                });
                self.record_word(true);
                self.phase = SessionPhase::WordOver { won: true };
                Resolution::Solved
            }
            Mode::Endless if self.extra_lives > 0 => {
                self.extra_lives -= 1;
                profile
                    .stats_mut()
                    .record(Ledger::Endless, |b| b.add_hint(UpgradeKind::ExtraLife));
                self.round.restart();
                log::info!("extra life used, {} left", self.extra_lives);
                Resolution::ExtraLifeUsed {
                    lives_left: self.extra_lives,
                }
            }
            Mode::Endless => {
                profile.stats_mut().record(Ledger::Endless, |b| {
                    b.total_words_attempted += 1;
                    b.total_guesses += guesses;
                });
                self.record_word(false);
                Resolution::GameOver(self.finish_endless(profile))
            }
        }
    }

    fn pay_out(&self, profile: &mut Profile) -> u32 {
        let gold = self.config.payout(self.words_solved, self.bosses_killed);
        profile.player_mut().gold += gold;
        profile.player_mut().words_completed = 0;
        profile
            .stats_mut()
            .record(self.mode.ledger(), |b| b.total_gold_earned += u64::from(gold));
        gold
    }

    fn finish_run(&mut self, profile: &mut Profile) -> Summary {
        let gold_earned = self.pay_out(profile);
        let (words, bosses, guesses) = (
            u64::from(self.words_solved),
            u64::from(self.bosses_killed),
            self.guesses_used,
        );
        profile.stats_mut().record(Ledger::Normal, |b| {
            b.note_completed_run(words, bosses, guesses);
            b.runs_completed += 1;
        });
        self.phase = SessionPhase::Finished;
        log::info!(
            "run complete: {}/{} words, {gold_earned} gold",
            self.words_solved,
            self.slots.len()
        );

        Summary {
            mode: Mode::Run,
            words: self.records.clone(),
            words_solved: self.words_solved,
            words_total: self.slots.len(),
            bosses_killed: self.bosses_killed,
            gold_earned,
            failed_word: None,
            new_best: false,
        }
    }

    fn finish_endless(&mut self, profile: &mut Profile) -> Summary {
        let words = u64::from(self.words_solved);
        let stats = profile.stats_mut();
        let new_best = stats.endless.note_endless_words(words);
        stats.total.note_endless_words(words);
        let gold_earned = self.pay_out(profile);
        self.phase = SessionPhase::Finished;
        log::info!("endless over: {} words, {gold_earned} gold", self.words_solved);

        Summary {
            mode: Mode::Endless,
            words: self.records.clone(),
            words_solved: self.words_solved,
            words_total: self.records.len(),
            bosses_killed: self.bosses_killed,
            gold_earned,
            failed_word: Some(self.round.target().clone()),
            new_best,
        }
    }
}

fn draw_slot<R: Rng + ?Sized>(
    corpus: &WordCorpus,
    config: &SessionConfig,
    boss: bool,
    rng: &mut R,
) -> WordSlot {
    let length = if boss { WordLength::Seven } else { WordLength::Five };
    WordSlot::new(corpus.draw(length, config.difficulty, rng), boss)
}

/// Draw from the slot's own pool, avoiding the current target when the pool allows
fn redraw<R: Rng + ?Sized>(
    corpus: &WordCorpus,
    config: &SessionConfig,
    length: WordLength,
    current: &Word,
    rng: &mut R,
) -> Word {
    let others: Vec<&Word> = corpus
        .answer_pool(length, config.difficulty)
        .words()
        .iter()
        .filter(|word| *word != current)
        .collect();
    others
        .choose(rng)
        .map_or_else(|| current.clone(), |word| (*word).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::{Difficulty, Modifiers};
    use crate::profile::{MemoryStore, StoreKey};
    use crate::wordlists::corpus::tests::small_corpus;
    use crate::wordlists::loader::parse_list;
    use rand::SeedableRng;

    /// Every regular draw is "crane", every boss draw "journey"
    fn fixed_corpus() -> WordCorpus {
        WordCorpus::new(
            parse_list("crane\nslate\nirate\ncrate\ngrate\napple\nspeed\nrobot\nfloor\nbrick", WordLength::Five),
            parse_list(&"crane\n".repeat(10), WordLength::Five),
            parse_list("journey\njourney", WordLength::Seven),
            parse_list("journey\nhistory\nbalance", WordLength::Seven),
        )
        .unwrap()
    }

    fn profile_with_levels(levels: &str) -> Profile {
        let store = MemoryStore::new().with(StoreKey::UpgradeLevels, levels);
        Profile::load(Box::new(store)).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn start<'a>(
        mode: Mode,
        modifiers: Modifiers,
        difficulty: Difficulty,
        corpus: &'a WordCorpus,
        profile: &mut Profile,
    ) -> Session<'a> {
        let config = SessionConfig::new(modifiers, difficulty);
        Session::start(mode, config, corpus, profile, rng()).unwrap()
    }

    fn wrong_guess(session: &Session<'_>) -> &'static str {
        match (session.round().is_boss(), session.round().target().text()) {
            (true, "history") => "balance",
            (true, _) => "history",
            (false, "slate") => "irate",
            (false, _) => "slate",
        }
    }

    fn solve_current(session: &mut Session<'_>, profile: &mut Profile) -> GuessOutcome {
        let target = session.round().target().text().to_string();
        session.submit_guess(profile, &target).unwrap()
    }

    fn lose_current(session: &mut Session<'_>, profile: &mut Profile) -> Resolution {
        loop {
            let guess = wrong_guess(session);
            if let GuessOutcome::Resolved(resolution) = session.submit_guess(profile, guess).unwrap() {
                return resolution;
            }
        }
    }

    #[test]
    fn perfect_easy_run() {
        let corpus = small_corpus();
        let mut profile = Profile::in_memory();
        let mut session = start(Mode::Run, Modifiers::default(), Difficulty::Easy, &corpus, &mut profile);
        assert_eq!(session.word_count(), Some(5));
        assert_eq!(profile.stats().normal.runs_played, 1);

        let mut summary = None;
        for _ in 0..5 {
            assert_eq!(
                solve_current(&mut session, &mut profile),
                GuessOutcome::Resolved(Resolution::Solved)
            );
            if let Advance::Finished(done) = session.next_word(&mut profile).unwrap() {
                summary = Some(done);
            }
        }

        let summary = summary.unwrap();
        assert_eq!(summary.words_solved, 5);
        assert_eq!(summary.gold_earned, 20);
        assert!(summary.words.iter().all(|w| w.solved && w.guesses == 1));
        assert_eq!(session.phase(), SessionPhase::Finished);

        let normal = &profile.stats().normal;
        assert_eq!(normal.best_run_guesses, 5);
        assert_eq!(normal.best_run_words, 5);
        assert_eq!(normal.runs_completed, 1);
        assert_eq!(normal.total_words_solved, 5);
        assert_eq!(normal.total_words_attempted, 5);
        assert_eq!(normal.total_guesses, 5);
        assert_eq!(normal.total_gold_earned, 20);
        assert_eq!(profile.stats().total.total_gold_earned, 20);
        assert_eq!(profile.player().gold, 5 + 20);
        assert_eq!(profile.player().words_completed, 0);
    }

    #[test]
    fn perfect_hard_run_pays_five_per_word() {
        let corpus = small_corpus();
        let mut profile = Profile::in_memory();
        let mut session = start(Mode::Run, Modifiers::default(), Difficulty::Hard, &corpus, &mut profile);
        let mut gold = 0;
        for _ in 0..5 {
            solve_current(&mut session, &mut profile);
            if let Advance::Finished(summary) = session.next_word(&mut profile).unwrap() {
                gold = summary.gold_earned;
            }
        }
        assert_eq!(gold, 25);
        assert_eq!(profile.stats().normal.best_run_guesses, 5);
    }

    #[test]
    fn run_boss_is_last_and_counted_at_resolution() {
        let corpus = small_corpus();
        let mut profile = Profile::in_memory();
        let modifiers = Modifiers {
            extra_word: true,
            boss: true,
            ..Modifiers::default()
        };
        let mut session = start(Mode::Run, modifiers, Difficulty::Easy, &corpus, &mut profile);
        assert_eq!(session.word_count(), Some(7));

        for _ in 0..6 {
            assert!(!session.round().is_boss());
            lose_current(&mut session, &mut profile);
            session.next_word(&mut profile).unwrap();
        }
        assert!(session.round().is_boss());
        assert_eq!(session.round().target().len(), 7);
        assert_eq!(profile.stats().normal.total_bosses_attempted, 0);

        solve_current(&mut session, &mut profile);
        assert_eq!(profile.stats().normal.total_bosses_attempted, 1);
        assert_eq!(profile.stats().normal.total_bosses_solved, 1);

        let Advance::Finished(summary) = session.next_word(&mut profile).unwrap() else {
            panic!("run should be over");
        };
        // the boss counts as a solved word too
        assert_eq!(summary.words_solved, 1);
        assert_eq!(summary.gold_earned, 4 + 10);
        assert_eq!(summary.bosses_killed, 1);
        assert_eq!(profile.stats().normal.best_run_boss, 1);
    }

    #[test]
    fn fewer_guesses_and_extra_guess_upgrade() {
        let corpus = small_corpus();
        let mut profile = profile_with_levels("[1,0,0,0,0,0,0]");
        let modifiers = Modifiers {
            fewer_guesses: true,
            ..Modifiers::default()
        };
        let session = start(Mode::Endless, modifiers, Difficulty::Easy, &corpus, &mut profile);
        assert_eq!(session.round().allowance(), 7);
    }

    #[test]
    fn allowance_holds_under_bonus_guesses() {
        let corpus = small_corpus();
        let mut profile = profile_with_levels("[1,0,0,0,5,0,0]");
        let mut session = start(Mode::Run, Modifiers::default(), Difficulty::Easy, &corpus, &mut profile);
        for _ in 0..3 {
            session.use_upgrade(&mut profile, UpgradeKind::BonusGuess).unwrap();
        }
        assert_eq!(session.round().allowance(), 7 + 1 + 3);
        let resolution = lose_current(&mut session, &mut profile);
        assert_eq!(resolution, Resolution::Failed);
        assert_eq!(session.round().guess_count(), 11);
        assert!(session.submit_guess(&mut profile, "slate").is_err());
        assert_eq!(profile.stats().normal.hints_used(UpgradeKind::BonusGuess), 3);
    }

    #[test]
    fn failed_hint_changes_nothing() {
        let corpus = fixed_corpus();
        let mut profile = profile_with_levels("[0,5,5,5,5,0,0]");
        let mut session = start(Mode::Run, Modifiers::default(), Difficulty::Easy, &corpus, &mut profile);
        // "crate" is green everywhere but position 3
        session.submit_guess(&mut profile, "crate").unwrap();
        let hint = session.use_upgrade(&mut profile, UpgradeKind::SuperHint).unwrap();
        assert_eq!(hint.to_string(), "Super Hint: Letter 4 is N");

        let stats_before = profile.stats().clone();
        let hints_before = session.round().hints().len();
        let uses_before = session.uses().remaining(UpgradeKind::SuperHint);

        assert!(matches!(
            session.use_upgrade(&mut profile, UpgradeKind::SuperHint),
            Err(GameError::NoCandidates(UpgradeKind::SuperHint))
        ));
        assert_eq!(profile.stats(), &stats_before);
        assert_eq!(session.round().hints().len(), hints_before);
        assert_eq!(session.uses().remaining(UpgradeKind::SuperHint), uses_before);
    }

    #[test]
    fn positive_hint_with_every_letter_typed_changes_nothing() {
        let corpus = fixed_corpus();
        let mut profile = profile_with_levels("[0,0,2,0,0,0,0]");
        let mut session = start(Mode::Run, Modifiers::default(), Difficulty::Easy, &corpus, &mut profile);
        // typed: s l a t e b r i c k; "n" is the only target letter left
        session.submit_guess(&mut profile, "slate").unwrap();
        session.submit_guess(&mut profile, "brick").unwrap();
        let hint = session.use_upgrade(&mut profile, UpgradeKind::PositiveHint).unwrap();
        assert_eq!(hint, Hint::Present(b'n'));

        let normal_before = profile.stats().normal.clone();
        let total_before = profile.stats().total.clone();
        let hints_before = session.round().hints().to_vec();

        assert!(matches!(
            session.use_upgrade(&mut profile, UpgradeKind::PositiveHint),
            Err(GameError::NoCandidates(UpgradeKind::PositiveHint))
        ));
        assert_eq!(session.uses().remaining(UpgradeKind::PositiveHint), 1);
        assert_eq!(session.round().hints(), hints_before.as_slice());
        assert_eq!(profile.stats().normal, normal_before);
        assert_eq!(profile.stats().total, total_before);
        assert_eq!(profile.stats().normal.hints_used(UpgradeKind::PositiveHint), 1);
        assert_eq!(profile.stats().total.hints_used(UpgradeKind::PositiveHint), 1);
    }

    #[test]
    fn negative_hint_with_every_absent_letter_named_changes_nothing() {
        let corpus = fixed_corpus();
        let mut profile = profile_with_levels("[0,0,0,1,0,0,0]");
        let mut session = start(Mode::Endless, Modifiers::default(), Difficulty::Easy, &corpus, &mut profile);
        let target = session.round().target().clone();
        for letter in (b'a'..=b'z').filter(|&l| !target.has_letter(l)) {
            session.round.push_hint(Hint::Absent(letter));
        }
        assert_eq!(session.round().hints().len(), 26 - 5);

        let endless_before = profile.stats().endless.clone();
        let total_before = profile.stats().total.clone();
        let hints_before = session.round().hints().to_vec();

        assert!(matches!(
            session.use_upgrade(&mut profile, UpgradeKind::NegativeHint),
            Err(GameError::NoCandidates(UpgradeKind::NegativeHint))
        ));
        assert_eq!(session.uses().remaining(UpgradeKind::NegativeHint), 1);
        assert_eq!(session.round().hints(), hints_before.as_slice());
        assert_eq!(profile.stats().endless, endless_before);
        assert_eq!(profile.stats().total, total_before);
        assert_eq!(profile.stats().endless.hints_used(UpgradeKind::NegativeHint), 0);
        assert_eq!(profile.stats().total.hints_used(UpgradeKind::NegativeHint), 0);
    }

    #[test]
    fn exhausted_uses_are_refused() {
        let corpus = small_corpus();
        let mut profile = profile_with_levels("[0,0,1,0,0,0,0]");
        let mut session = start(Mode::Endless, Modifiers::default(), Difficulty::Easy, &corpus, &mut profile);
        session.use_upgrade(&mut profile, UpgradeKind::PositiveHint).unwrap();
        assert!(!session.can_use(UpgradeKind::PositiveHint));
        assert!(matches!(
            session.use_upgrade(&mut profile, UpgradeKind::PositiveHint),
            Err(GameError::NoUsesLeft(UpgradeKind::PositiveHint))
        ));
        assert!(matches!(
            session.use_upgrade(&mut profile, UpgradeKind::ExtraLife),
            Err(GameError::NotUsable(UpgradeKind::ExtraLife))
        ));
        assert_eq!(profile.stats().endless.hints_used(UpgradeKind::PositiveHint), 1);
    }

    #[test]
    fn reroll_keeps_hints_and_resets_round() {
        let corpus = small_corpus();
        let mut profile = profile_with_levels("[0,0,0,2,2,0,3]");
        let mut session = start(Mode::Endless, Modifiers::default(), Difficulty::Easy, &corpus, &mut profile);

        session.use_upgrade(&mut profile, UpgradeKind::NegativeHint).unwrap();
        session.use_upgrade(&mut profile, UpgradeKind::BonusGuess).unwrap();
        let guess = wrong_guess(&session);
        session.submit_guess(&mut profile, guess).unwrap();
        let before = session.round().target().clone();

        session.reroll(&mut profile).unwrap();
        let round = session.round();
        assert_ne!(round.target(), &before);
        assert_eq!(round.target().length(), WordLength::Five);
        assert!(!round.is_boss());
        assert_eq!(round.hints().len(), 2);
        assert_eq!(round.guess_count(), 0);
        assert_eq!(round.bonus_guesses(), 0);
        assert_eq!(session.uses().remaining(UpgradeKind::WordReroll), 2);

        let endless = &profile.stats().endless;
        assert_eq!(endless.hints_used(UpgradeKind::WordReroll), 1);
        assert_eq!(endless.total_words_attempted, 0);
    }

    #[test]
    fn reroll_without_uses_is_refused() {
        let corpus = small_corpus();
        let mut profile = Profile::in_memory();
        let mut session = start(Mode::Run, Modifiers::default(), Difficulty::Easy, &corpus, &mut profile);
        assert!(matches!(
            session.reroll(&mut profile),
            Err(GameError::NoUsesLeft(UpgradeKind::WordReroll))
        ));
    }

    #[test]
    fn two_extra_lives_then_game_over() {
        let corpus = fixed_corpus();
        let mut profile = profile_with_levels("[0,0,0,1,0,2,0]");
        let mut session = start(Mode::Endless, Modifiers::default(), Difficulty::Easy, &corpus, &mut profile);
        session.use_upgrade(&mut profile, UpgradeKind::NegativeHint).unwrap();
        assert_eq!(session.extra_lives(), 2);

        assert_eq!(
            lose_current(&mut session, &mut profile),
            Resolution::ExtraLifeUsed { lives_left: 1 }
        );
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.round().target().text(), "crane");
        assert_eq!(session.round().guess_count(), 0);
        assert_eq!(session.round().hints().len(), 1);

        assert_eq!(
            lose_current(&mut session, &mut profile),
            Resolution::ExtraLifeUsed { lives_left: 0 }
        );
        assert_eq!(session.round().target().text(), "crane");

        let Resolution::GameOver(summary) = lose_current(&mut session, &mut profile) else {
            panic!("third loss should end the session");
        };
        assert_eq!(summary.failed_word.unwrap().text(), "crane");
        assert_eq!(summary.words_solved, 0);
        assert_eq!(summary.gold_earned, 0);
        assert_eq!(session.phase(), SessionPhase::Finished);

        let endless = &profile.stats().endless;
        assert_eq!(endless.hints_used(UpgradeKind::ExtraLife), 2);
        assert_eq!(endless.total_words_attempted, 1);
        assert_eq!(endless.total_guesses, 7);
        assert_eq!(profile.stats().total.runs_played, 0);
    }

    #[test]
    fn endless_boss_every_fifth_word_counted_at_start() {
        let corpus = fixed_corpus();
        let mut profile = Profile::in_memory();
        let modifiers = Modifiers {
            boss: true,
            ..Modifiers::default()
        };
        let mut session = start(Mode::Endless, modifiers, Difficulty::Hard, &corpus, &mut profile);

        for n in 1..=4 {
            assert!(!session.round().is_boss(), "word {n}");
            solve_current(&mut session, &mut profile);
            session.next_word(&mut profile).unwrap();
        }
        assert!(session.round().is_boss());
        assert_eq!(session.round().target().text(), "journey");
        assert_eq!(profile.stats().endless.total_bosses_attempted, 1);
        assert_eq!(profile.stats().endless.total_bosses_solved, 0);

        solve_current(&mut session, &mut profile);
        assert_eq!(profile.stats().endless.total_bosses_solved, 1);
        assert_eq!(profile.stats().endless.total_bosses_attempted, 1);
        session.next_word(&mut profile).unwrap();

        let Resolution::GameOver(summary) = lose_current(&mut session, &mut profile) else {
            panic!("no lives, should be over");
        };
        // 5 words at 5 gold (hard) plus one boss
        assert_eq!(summary.gold_earned, 5 * 5 + 10);
        assert!(summary.new_best);
        assert_eq!(profile.stats().endless.endless_best_words, 5);
        assert_eq!(profile.stats().total.endless_best_words, 5);
        assert_eq!(profile.player().gold, 5 + 35);
    }

    #[test]
    fn endless_cannot_advance_after_game_over() {
        let corpus = small_corpus();
        let mut profile = Profile::in_memory();
        let mut session = start(Mode::Endless, Modifiers::default(), Difficulty::Easy, &corpus, &mut profile);
        lose_current(&mut session, &mut profile);
        assert!(matches!(session.next_word(&mut profile), Err(GameError::NotPlaying)));
        assert!(matches!(
            session.submit_guess(&mut profile, "crane"),
            Err(GameError::NotPlaying)
        ));
    }

    #[test]
    fn timer_expiry_fails_the_word() {
        let corpus = small_corpus();
        let mut profile = Profile::in_memory();
        let modifiers = Modifiers {
            timer: true,
            ..Modifiers::default()
        };
        let mut session = start(Mode::Run, modifiers, Difficulty::Easy, &corpus, &mut profile);
        for _ in 0..59 {
            assert_eq!(session.tick(&mut profile).unwrap(), None);
        }
        assert_eq!(session.tick(&mut profile).unwrap(), Some(Resolution::Failed));
        assert_eq!(session.phase(), SessionPhase::WordOver { won: false });
        // stale ticks after resolution are ignored
        assert_eq!(session.tick(&mut profile).unwrap(), None);

        session.next_word(&mut profile).unwrap();
        assert_eq!(session.round().timer().remaining(), Some(60));
    }

    #[test]
    fn quitting_endless_keeps_peak_without_gold() {
        let corpus = fixed_corpus();
        let mut profile = Profile::in_memory();
        let mut session = start(Mode::Endless, Modifiers::default(), Difficulty::Easy, &corpus, &mut profile);
        for _ in 0..3 {
            solve_current(&mut session, &mut profile);
            session.next_word(&mut profile).unwrap();
        }
        assert_eq!(profile.player().words_completed, 3);
        session.quit(&mut profile).unwrap();

        assert_eq!(profile.player().gold, 5);
        assert_eq!(profile.player().words_completed, 0);
        assert_eq!(profile.stats().endless.endless_best_words, 3);
        assert_eq!(profile.stats().total.endless_best_words, 3);
        assert_eq!(profile.stats().endless.total_gold_earned, 0);
    }

    #[test]
    fn quitting_run_pays_nothing() {
        let corpus = small_corpus();
        let mut profile = Profile::in_memory();
        let mut session = start(Mode::Run, Modifiers::default(), Difficulty::Easy, &corpus, &mut profile);
        solve_current(&mut session, &mut profile);
        session.quit(&mut profile).unwrap();
        assert_eq!(profile.player().gold, 5);
        assert_eq!(profile.stats().normal.runs_completed, 0);
        assert_eq!(profile.stats().normal.runs_played, 1);
    }

    #[test]
    fn invalid_guess_leaves_round_alone() {
        let corpus = small_corpus();
        let mut profile = Profile::in_memory();
        let mut session = start(Mode::Run, Modifiers::default(), Difficulty::Easy, &corpus, &mut profile);
        assert!(matches!(
            session.submit_guess(&mut profile, "abc"),
            Err(GameError::WrongLength { expected: 5 })
        ));
        assert!(matches!(
            session.submit_guess(&mut profile, "qqqqq"),
            Err(GameError::NotInWordList)
        ));
        assert_eq!(session.round().guess_count(), 0);
    }
}
