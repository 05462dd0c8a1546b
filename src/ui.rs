pub fn render_index(date: &str, habit_count: usize, unread_count: usize) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{HABITS}}", &habit_count.to_string())
        .replace("{{UNREAD}}", if unread_count > 0 { "dot" } else { "" })
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    :root {
      --bg: #111111;
      --card: #1c1c1c;
      --card-2: #2c2c2c;
      --ink: #f4f4f4;
      --muted: rgba(255, 255, 255, 0.45);
      --accent: #a8e6cf;
      --warn: #fb923c;
      --danger: #f87171;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
      display: flex;
      justify-content: center;
      padding: 24px 12px 64px;
    }

    .app {
      width: min(480px, 100%);
      display: grid;
      gap: 20px;
    }

    header {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    h1 {
      font-size: 1.8rem;
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    nav {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: var(--card);
      border-radius: 999px;
    }

    nav button {
      flex: 1;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 10px 0;
      color: var(--muted);
      font-weight: 600;
      cursor: pointer;
    }

    nav button.active {
      background: var(--card-2);
      color: var(--ink);
    }

    section.page {
      display: none;
    }

    section.page.active {
      display: grid;
      gap: 14px;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      padding: 18px;
      display: grid;
      gap: 12px;
    }

    .habit-head {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
    }

    .habit-name {
      font-size: 1.2rem;
      font-weight: 700;
      overflow: hidden;
      text-overflow: ellipsis;
      white-space: nowrap;
    }

    .badge {
      min-width: 52px;
      text-align: center;
      border-radius: 14px;
      padding: 8px 10px;
      font-weight: 700;
      color: #111;
      cursor: pointer;
    }

    .badge small {
      display: block;
      font-size: 0.6rem;
      font-weight: 600;
    }

    .week {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .week button {
      border: 1px solid rgba(255, 255, 255, 0.12);
      background: transparent;
      color: var(--muted);
      border-radius: 12px;
      padding: 10px 0;
      cursor: pointer;
      font-weight: 600;
    }

    .week button.done {
      background: var(--accent);
      border-color: var(--accent);
      color: #111;
    }

    .meta {
      color: var(--muted);
      font-size: 0.85rem;
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .link {
      background: none;
      border: none;
      color: var(--muted);
      cursor: pointer;
      font-size: 0.85rem;
      padding: 0;
    }

    .link.danger {
      color: var(--danger);
    }

    form.card label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    input, select, textarea {
      background: var(--card-2);
      border: 1px solid rgba(255, 255, 255, 0.08);
      border-radius: 12px;
      color: var(--ink);
      padding: 10px 12px;
      font-size: 0.95rem;
    }

    textarea {
      min-height: 90px;
      resize: vertical;
    }

    .row {
      display: flex;
      gap: 10px;
      align-items: center;
      flex-wrap: wrap;
    }

    .chip {
      border: 1px solid rgba(255, 255, 255, 0.15);
      background: transparent;
      color: var(--muted);
      border-radius: 999px;
      padding: 8px 14px;
      cursor: pointer;
      font-weight: 600;
    }

    .chip.active {
      background: var(--ink);
      border-color: var(--ink);
      color: #111;
    }

    .primary {
      background: var(--accent);
      border: none;
      border-radius: 14px;
      color: #111;
      font-weight: 700;
      padding: 12px;
      cursor: pointer;
    }

    .ghost {
      background: var(--card-2);
      border: none;
      border-radius: 14px;
      color: var(--ink);
      font-weight: 600;
      padding: 12px;
      cursor: pointer;
    }

    .notif {
      display: flex;
      gap: 12px;
      align-items: flex-start;
    }

    .notif.missed {
      border: 1px solid rgba(251, 146, 60, 0.35);
    }

    .notif .when {
      margin-left: auto;
      color: var(--muted);
      font-size: 0.8rem;
      font-family: monospace;
    }

    .group-title {
      color: var(--muted);
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      margin: 4px 2px;
    }

    .group-title.missed {
      color: var(--warn);
    }

    .timer {
      text-align: center;
      font-size: 3.2rem;
      font-weight: 700;
      font-variant-numeric: tabular-nums;
    }

    .stat-grid {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 10px;
    }

    .stat-grid .card {
      text-align: center;
      gap: 4px;
    }

    .stat-grid .value {
      font-size: 1.5rem;
      font-weight: 700;
    }

    .stat-grid .label {
      color: var(--muted);
      font-size: 0.8rem;
    }

    .dot {
      display: inline-block;
      width: 9px;
      height: 9px;
      border-radius: 50%;
      background: var(--danger);
      margin-left: 6px;
      vertical-align: super;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--muted);
      text-align: center;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: var(--accent);
    }

    .empty {
      text-align: center;
      color: var(--muted);
      padding: 28px 0;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Habits</h1>
        <p class="subtitle">{{DATE}} &middot; {{HABITS}} habits</p>
      </div>
      <button class="ghost" id="bell-btn">&#128276;<span id="unread-dot" class="{{UNREAD}}"></span></button>
    </header>

    <nav>
      <button data-page="habits" class="active">Habits</button>
      <button data-page="journal">Journal</button>
      <button data-page="focus">Focus</button>
      <button data-page="other">Other</button>
    </nav>

    <section class="page active" id="page-habits">
      <div id="habit-list"></div>
      <form class="card" id="habit-form">
        <strong id="habit-form-title">New habit</strong>
        <label>Activity
          <input id="h-activity" maxlength="15" placeholder="Type activity" required />
        </label>
        <label>Color
          <input id="h-color" type="color" value='#a8e6cf' />
        </label>
        <div class="row">
          <label>Times <input id="h-times" type="number" min="1" value="1" style="width:80px" /></label>
          <label>In days <input id="h-days" type="number" min="1" value="1" style="width:80px" /></label>
        </div>
        <label>Remind on</label>
        <div class="row" id="h-rem-days"></div>
        <label>Remind at (up to 3)</label>
        <div class="row">
          <input id="h-rem-t1" type="time" />
          <input id="h-rem-t2" type="time" />
          <input id="h-rem-t3" type="time" />
        </div>
        <button class="primary" type="submit">Save habit</button>
      </form>
    </section>

    <section class="page" id="page-notifications">
      <div class="row" style="justify-content: space-between">
        <strong>Notifications</strong>
        <button class="link danger" id="clear-notifs">Clear all</button>
      </div>
      <div id="notif-list"></div>
    </section>

    <section class="page" id="page-journal">
      <div class="row">
        <select id="j-context"></select>
      </div>
      <form class="card" id="journal-form">
        <textarea id="j-content" placeholder="How did you feel today? What were your thoughts?"></textarea>
        <button class="primary" type="submit">Save entry</button>
      </form>
      <div id="journal-list"></div>
    </section>

    <section class="page" id="page-focus">
      <div class="card">
        <div class="row" style="justify-content:center">
          <button class="chip active" data-mode="focus">Focus</button>
          <button class="chip" data-mode="break">Break</button>
        </div>
        <div class="timer" id="timer">25:00</div>
        <div class="row" style="justify-content:center" id="focus-presets"></div>
        <div class="row" style="justify-content:center">
          <button class="primary" id="timer-toggle">Start</button>
          <button class="ghost" id="timer-reset">Reset</button>
        </div>
      </div>
      <div class="row">
        <select id="f-timeframe">
          <option value="today">Today</option>
          <option value="week">This Week</option>
          <option value="month">This Month</option>
          <option value="total">Total Time</option>
        </select>
      </div>
      <div class="stat-grid">
        <div class="card"><span class="value" id="f-cycles">0</span><span class="label">Cycles</span></div>
        <div class="card"><span class="value" id="f-duration">0m</span><span class="label">Time</span></div>
      </div>
    </section>

    <section class="page" id="page-other">
      <div class="card">
        <strong>Backup &amp; restore</strong>
        <p class="subtitle">Download your habits, journal, and notifications as a JSON file, or restore from one.</p>
        <button class="primary" id="export-btn">Export data</button>
        <input id="import-file" type="file" accept="application/json" hidden />
        <button class="ghost" id="import-btn">Import data</button>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const DAY_NAMES = ['S', 'M', 'T', 'W', 'T', 'F', 'S'];
    const FOCUS_PRESETS = [15, 20, 25, 30, 40, 45, 50, 60, 90];
    const BREAK_PRESETS = [3, 5, 10, 15, 20];

    const statusEl = document.getElementById('status');
    let statusTimer = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      clearTimeout(statusTimer);
      if (message) {
        statusTimer = setTimeout(() => setStatus('', ''), 2500);
      }
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      const text = await res.text();
      return text ? JSON.parse(text) : null;
    };

    const post = (path, body) => api(path, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(body)
    });

    // Navigation

    const pages = ['habits', 'journal', 'focus', 'other'];
    document.querySelectorAll('nav button').forEach((button) => {
      button.addEventListener('click', () => showPage(button.dataset.page));
    });

    const showPage = (page) => {
      document.querySelectorAll('section.page').forEach((el) => el.classList.remove('active'));
      document.getElementById('page-' + page).classList.add('active');
      document.querySelectorAll('nav button').forEach((el) => {
        el.classList.toggle('active', el.dataset.page === page);
      });
    };

    // Week helpers: Sunday-based, matching reminder day indexes.

    const weekDates = () => {
      const now = new Date();
      const start = new Date(now);
      start.setDate(now.getDate() - now.getDay());
      return Array.from({ length: 7 }, (_, i) => {
        const d = new Date(start);
        d.setDate(start.getDate() + i);
        const pad = (n) => String(n).padStart(2, '0');
        return d.getFullYear() + '-' + pad(d.getMonth() + 1) + '-' + pad(d.getDate());
      });
    };

    // Habits

    let habits = [];

    const loadHabits = async () => {
      habits = await api('/api/habits');
      renderHabits();
      renderJournalContexts();
    };

    const renderHabits = () => {
      const list = document.getElementById('habit-list');
      list.innerHTML = '';
      if (habits.length === 0) {
        list.innerHTML = '<div class="card empty">No habits yet. Create your first one below.</div>';
        return;
      }
      const dates = weekDates();
      habits.forEach((habit) => {
        const card = document.createElement('div');
        card.className = 'card';

        const head = document.createElement('div');
        head.className = 'habit-head';
        const name = document.createElement('span');
        name.className = 'habit-name';
        name.textContent = habit.activity;
        const badge = document.createElement('button');
        badge.className = 'badge';
        badge.style.background = habit.color;
        badge.type = 'button';
        if (habit.displayMode === 'streak') {
          badge.innerHTML = habit.streak + '<small>streak</small>';
        } else {
          badge.innerHTML = habit.allCompletions.length + '<small>total</small>';
        }
        badge.addEventListener('click', () => toggleDisplayMode(habit));
        head.append(name, badge);

        const week = document.createElement('div');
        week.className = 'week';
        dates.forEach((date, index) => {
          const day = document.createElement('button');
          day.type = 'button';
          day.textContent = DAY_NAMES[index];
          if (habit.completedDays.includes(index)) {
            day.classList.add('done');
          }
          day.addEventListener('click', () => toggleCompletion(habit.id, date));
          week.appendChild(day);
        });

        const meta = document.createElement('div');
        meta.className = 'meta';
        const freq = document.createElement('span');
        freq.textContent = habit.frequency.times + 'x in ' + habit.frequency.days + ' day(s)';
        const del = document.createElement('button');
        del.className = 'link danger';
        del.textContent = 'Delete';
        del.addEventListener('click', () => deleteHabit(habit.id));
        meta.append(freq, del);

        card.append(head, week, meta);
        list.appendChild(card);
      });
    };

    const toggleCompletion = async (id, date) => {
      try {
        await post('/api/habits/' + id + '/completions', { date });
        await loadHabits();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const toggleDisplayMode = async (habit) => {
      const displayMode = habit.displayMode === 'streak' ? 'count' : 'streak';
      try {
        await api('/api/habits/' + habit.id, {
          method: 'PUT',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ displayMode })
        });
        await loadHabits();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const deleteHabit = async (id) => {
      if (!confirm('Are you sure you want to delete this habit?')) return;
      try {
        await api('/api/habits/' + id, { method: 'DELETE' });
        await loadHabits();
        setStatus('Habit deleted', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    // Create form

    const remDaysEl = document.getElementById('h-rem-days');
    const selectedRemDays = new Set();
    DAY_NAMES.forEach((label, index) => {
      const chip = document.createElement('button');
      chip.type = 'button';
      chip.className = 'chip';
      chip.textContent = label;
      chip.addEventListener('click', () => {
        if (selectedRemDays.has(index)) {
          selectedRemDays.delete(index);
          chip.classList.remove('active');
        } else {
          selectedRemDays.add(index);
          chip.classList.add('active');
        }
      });
      remDaysEl.appendChild(chip);
    });

    const toLabel = (value) => {
      if (!value) return null;
      let [hours, minutes] = value.split(':').map(Number);
      const period = hours >= 12 ? 'PM' : 'AM';
      hours = hours % 12 || 12;
      const pad = (n) => String(n).padStart(2, '0');
      return pad(hours) + ':' + pad(minutes) + ' ' + period;
    };

    document.getElementById('habit-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const times = ['h-rem-t1', 'h-rem-t2', 'h-rem-t3']
        .map((id) => toLabel(document.getElementById(id).value))
        .filter(Boolean);
      const body = {
        activity: document.getElementById('h-activity').value,
        color: document.getElementById('h-color').value,
        frequency: {
          times: Number(document.getElementById('h-times').value),
          days: Number(document.getElementById('h-days').value)
        },
        reminders: { days: [...selectedRemDays], times }
      };
      try {
        await post('/api/habits', body);
        event.target.reset();
        selectedRemDays.clear();
        remDaysEl.querySelectorAll('.chip').forEach((c) => c.classList.remove('active'));
        await loadHabits();
        setStatus('Habit created!', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    // Notifications

    const unreadDot = document.getElementById('unread-dot');

    const refreshUnread = async () => {
      const notifications = await api('/api/notifications');
      const hasUnread = notifications.some((n) => !n.read);
      unreadDot.className = hasUnread ? 'dot' : '';
    };

    const renderNotifications = (notifications) => {
      const list = document.getElementById('notif-list');
      list.innerHTML = '';
      if (notifications.length === 0) {
        list.innerHTML = '<div class="card empty">All caught up! No new reminders today.</div>';
        return;
      }
      const groups = [
        ['Missed reminders', notifications.filter((n) => n.isMissed), 'missed'],
        ['Today', notifications.filter((n) => !n.isMissed), '']
      ];
      groups.forEach(([title, items, cls]) => {
        if (items.length === 0) return;
        const heading = document.createElement('div');
        heading.className = 'group-title ' + cls;
        heading.textContent = title;
        list.appendChild(heading);
        items.forEach((n) => {
          const card = document.createElement('div');
          card.className = 'card notif' + (n.isMissed ? ' missed' : '');
          const body = document.createElement('div');
          const line = document.createElement('div');
          line.innerHTML = '<strong>Time for ' + n.activity + '!</strong>';
          const sub = document.createElement('div');
          sub.className = 'subtitle';
          sub.textContent = n.isMissed
            ? 'You missed your ' + n.time + ' reminder. Let\'s get back on track!'
            : 'This is your scheduled reminder for ' + n.activity + '.';
          body.append(line, sub);
          const when = document.createElement('span');
          when.className = 'when';
          when.textContent = n.time;
          card.append(body, when);
          list.appendChild(card);
        });
      });
    };

    document.getElementById('bell-btn').addEventListener('click', async () => {
      showPage('habits');
      document.getElementById('page-habits').classList.remove('active');
      document.getElementById('page-notifications').classList.add('active');
      try {
        // Opening the panel marks everything read.
        const notifications = await post('/api/notifications/read', {});
        renderNotifications(notifications);
        unreadDot.className = '';
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('clear-notifs').addEventListener('click', async () => {
      try {
        await post('/api/notifications/clear', {});
        renderNotifications([]);
        setStatus('Notifications cleared', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    // Journal

    const contextSelect = document.getElementById('j-context');

    const renderJournalContexts = () => {
      const current = contextSelect.value;
      contextSelect.innerHTML = '<option value="">Journal</option>';
      habits.forEach((habit) => {
        const option = document.createElement('option');
        option.value = habit.id;
        option.textContent = habit.activity;
        contextSelect.appendChild(option);
      });
      contextSelect.value = current || '';
    };

    const loadJournal = async () => {
      const habitId = contextSelect.value;
      const query = habitId ? '?habitId=' + encodeURIComponent(habitId) : '?context=Journal';
      const entries = await api('/api/journal' + query);
      const list = document.getElementById('journal-list');
      list.innerHTML = '';
      if (entries.length === 0) {
        list.innerHTML = '<div class="card empty">No entries yet.</div>';
        return;
      }
      entries.forEach((entry) => {
        const card = document.createElement('div');
        card.className = 'card';
        const meta = document.createElement('div');
        meta.className = 'meta';
        const when = document.createElement('span');
        when.textContent = entry.context + ' · ' + new Date(entry.date).toLocaleString();
        const del = document.createElement('button');
        del.className = 'link danger';
        del.textContent = 'Delete';
        del.addEventListener('click', async () => {
          try {
            await api('/api/journal/' + entry.id, { method: 'DELETE' });
            await loadJournal();
          } catch (err) {
            setStatus(err.message, 'error');
          }
        });
        meta.append(when, del);
        const content = document.createElement('div');
        content.textContent = entry.content;
        card.append(meta, content);
        list.appendChild(card);
      });
    };

    contextSelect.addEventListener('change', loadJournal);

    document.getElementById('journal-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const content = document.getElementById('j-content').value;
      const habitId = contextSelect.value || null;
      try {
        await post('/api/journal', habitId ? { content, habitId } : { content });
        document.getElementById('j-content').value = '';
        await loadJournal();
        setStatus('Entry saved', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    // Focus timer

    let focusMode = 'focus';
    let initialMinutes = 25;
    let remainingSeconds = initialMinutes * 60;
    let ticking = null;

    const timerEl = document.getElementById('timer');
    const toggleBtn = document.getElementById('timer-toggle');

    const renderTimer = () => {
      const m = Math.floor(remainingSeconds / 60);
      const s = remainingSeconds % 60;
      timerEl.textContent = String(m).padStart(2, '0') + ':' + String(s).padStart(2, '0');
    };

    const renderPresets = () => {
      const presets = focusMode === 'focus' ? FOCUS_PRESETS : BREAK_PRESETS;
      const holder = document.getElementById('focus-presets');
      holder.innerHTML = '';
      presets.forEach((minutes) => {
        const chip = document.createElement('button');
        chip.type = 'button';
        chip.className = 'chip' + (minutes === initialMinutes ? ' active' : '');
        chip.textContent = minutes + 'm';
        chip.addEventListener('click', () => {
          initialMinutes = minutes;
          resetTimer();
          renderPresets();
        });
        holder.appendChild(chip);
      });
    };

    const resetTimer = () => {
      clearInterval(ticking);
      ticking = null;
      remainingSeconds = initialMinutes * 60;
      toggleBtn.textContent = 'Start';
      renderTimer();
    };

    const completeSession = async () => {
      clearInterval(ticking);
      ticking = null;
      toggleBtn.textContent = 'Start';
      try {
        await post('/api/focus/sessions', {
          mode: focusMode,
          durationSeconds: initialMinutes * 60
        });
        setStatus('Session recorded', 'ok');
        await loadFocusStats();
      } catch (err) {
        setStatus(err.message, 'error');
      }
      remainingSeconds = initialMinutes * 60;
      renderTimer();
    };

    toggleBtn.addEventListener('click', () => {
      if (ticking) {
        clearInterval(ticking);
        ticking = null;
        toggleBtn.textContent = 'Start';
        return;
      }
      toggleBtn.textContent = 'Pause';
      ticking = setInterval(() => {
        remainingSeconds -= 1;
        if (remainingSeconds <= 0) {
          completeSession();
          return;
        }
        renderTimer();
      }, 1000);
    });

    document.getElementById('timer-reset').addEventListener('click', resetTimer);

    document.querySelectorAll('[data-mode]').forEach((chip) => {
      chip.addEventListener('click', () => {
        focusMode = chip.dataset.mode;
        initialMinutes = focusMode === 'focus' ? 25 : 5;
        document.querySelectorAll('[data-mode]').forEach((c) => {
          c.classList.toggle('active', c.dataset.mode === focusMode);
        });
        resetTimer();
        renderPresets();
        loadFocusStats().catch((err) => setStatus(err.message, 'error'));
      });
    });

    const formatDuration = (totalSeconds) => {
      const hours = Math.floor(totalSeconds / 3600);
      const minutes = Math.floor((totalSeconds % 3600) / 60);
      return hours > 0 ? hours + 'h ' + minutes + 'm' : minutes + 'm';
    };

    const loadFocusStats = async () => {
      const timeframe = document.getElementById('f-timeframe').value;
      const stats = await api('/api/focus/stats?timeframe=' + timeframe + '&mode=' + focusMode);
      document.getElementById('f-cycles').textContent = stats.cycles;
      document.getElementById('f-duration').textContent = formatDuration(stats.durationSeconds);
    };

    document.getElementById('f-timeframe').addEventListener('change', () => {
      loadFocusStats().catch((err) => setStatus(err.message, 'error'));
    });

    // Backup

    document.getElementById('export-btn').addEventListener('click', async () => {
      try {
        const data = await api('/api/backup');
        const blob = new Blob([JSON.stringify(data, null, 2)], { type: 'application/json' });
        const url = URL.createObjectURL(blob);
        const link = document.createElement('a');
        link.href = url;
        link.download = 'habit-tracker-backup-' + new Date().toISOString().split('T')[0] + '.json';
        document.body.appendChild(link);
        link.click();
        document.body.removeChild(link);
        URL.revokeObjectURL(url);
        setStatus('Data exported successfully!', 'ok');
      } catch (err) {
        setStatus('Failed to export data', 'error');
      }
    });

    const importFile = document.getElementById('import-file');
    document.getElementById('import-btn').addEventListener('click', () => importFile.click());
    importFile.addEventListener('change', async () => {
      const file = importFile.files[0];
      if (!file) return;
      try {
        const parsed = JSON.parse(await file.text());
        await post('/api/restore', parsed);
        await loadHabits();
        setStatus('Data restored successfully!', 'ok');
      } catch (err) {
        setStatus('Invalid backup file', 'error');
      } finally {
        importFile.value = '';
      }
    });

    // Boot

    renderTimer();
    renderPresets();
    loadHabits().catch((err) => setStatus(err.message, 'error'));
    loadJournal().catch((err) => setStatus(err.message, 'error'));
    loadFocusStats().catch((err) => setStatus(err.message, 'error'));
    refreshUnread().catch(() => {});
    setInterval(() => refreshUnread().catch(() => {}), 15000);
  </script>
</body>
</html>
"#;
